use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// How a seat encodes the environment for its policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StateEncoding {
    /// x / width and y / height
    #[default]
    Normalized,
    /// Board coordinates as-is
    Raw,
}

/// Who restarts a rally after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestartPolicy {
    /// `Game::step` resets and starts training as soon as a point lands
    #[default]
    Immediate,
    /// The driver calls `Game::reset` itself
    External,
}

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board_width: f32,
    pub board_height: f32,
    pub paddle_x_fraction: f32,
    pub paddle_length_fraction: f32,
    pub paddle_width_fraction: f32,
    pub sensibility: f32,
    pub ball_diameter_fraction: f32,
    pub ball_speed: f32,
    pub max_memory: usize,
    pub discount: f32,
    pub reward_horizon: usize,
    pub reward_shaping: bool,
    pub state_encoding: StateEncoding,
    pub epsilon: f32,
    pub epsilon_decay: f32,
    pub train_epochs: usize,
    pub restart: RestartPolicy,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_width: Params::BOARD_WIDTH,
            board_height: Params::BOARD_HEIGHT,
            paddle_x_fraction: Params::PADDLE_X_FRACTION,
            paddle_length_fraction: Params::PADDLE_LENGTH_FRACTION,
            paddle_width_fraction: Params::PADDLE_WIDTH_FRACTION,
            sensibility: Params::PADDLE_SENSIBILITY,
            ball_diameter_fraction: Params::BALL_DIAMETER_FRACTION,
            ball_speed: Params::BALL_SPEED,
            max_memory: Params::MAX_MEMORY,
            discount: Params::DISCOUNT,
            reward_horizon: Params::REWARD_HORIZON,
            reward_shaping: true,
            state_encoding: StateEncoding::Normalized,
            epsilon: Params::EPSILON,
            epsilon_decay: Params::EPSILON_DECAY,
            train_epochs: Params::TRAIN_EPOCHS,
            restart: RestartPolicy::Immediate,
            seed: Params::RNG_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_x_fraction * self.board_width,
            Side::Right => (1.0 - self.paddle_x_fraction) * self.board_width,
        }
    }

    pub fn paddle_length(&self) -> f32 {
        self.paddle_length_fraction * self.board_height
    }

    pub fn paddle_width(&self) -> f32 {
        self.paddle_width_fraction * self.board_width
    }

    pub fn ball_diameter(&self) -> f32 {
        self.ball_diameter_fraction * self.board_height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.board_width * 0.5, self.board_height * 0.5)
    }

    /// Spawn point of a paddle: fixed x, vertically centred
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.board_height * 0.5)
    }

    /// Check ranges that the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn fail(msg: &str) -> Result<(), ConfigError> {
            Err(ConfigError::Validation(msg.to_string()))
        }

        if !(self.board_width.is_finite() && self.board_width > 0.0) {
            return fail("board_width must be > 0");
        }
        if !(self.board_height.is_finite() && self.board_height > 0.0) {
            return fail("board_height must be > 0");
        }
        for (name, value) in [
            ("paddle_x_fraction", self.paddle_x_fraction),
            ("paddle_length_fraction", self.paddle_length_fraction),
            ("paddle_width_fraction", self.paddle_width_fraction),
            ("ball_diameter_fraction", self.ball_diameter_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return fail(&format!("{name} must be in (0, 1)"));
            }
        }
        if !(self.ball_speed > 0.0) {
            return fail("ball_speed must be > 0");
        }
        if !(self.sensibility >= 0.0) {
            return fail("sensibility must be >= 0");
        }
        if self.max_memory == 0 {
            return fail("max_memory must be > 0");
        }
        // Any reward_horizon is accepted; one of max_memory or more credits everything
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return fail("discount must be in (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return fail("epsilon must be in [0, 1]");
        }
        if !(self.epsilon_decay >= 1.0) {
            return fail("epsilon_decay must be >= 1");
        }
        if self.train_epochs == 0 {
            return fail("train_epochs must be > 0");
        }
        Ok(())
    }
}
