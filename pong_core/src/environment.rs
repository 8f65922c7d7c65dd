use glam::Vec2;
use hecs::{Entity, World};
use log::debug;

use crate::systems::{check_goals, clamp_paddles, move_ball, paddle_bounces};
use crate::{Ball, Board, Config, GameRng, Paddle, Side, SimError};

const OWNED: &str = "environment entities are never despawned";

/// The physical match: one board, one ball and two paddles.
///
/// Ball and paddles live as components in a private `hecs::World`; each tick
/// runs the systems over it in order. A tick that scores leaves the
/// environment in the scored state until [`Environment::reset`].
pub struct Environment {
    config: Config,
    board: Board,
    world: World,
    ball: Entity,
    paddles: [Entity; 2], // indexed by Side::index
    rng: GameRng,
    reward: i8,
}

impl Environment {
    pub fn new(config: &Config) -> Self {
        let board = Board::new(config.board_width, config.board_height);
        let mut world = World::new();

        let paddles = [Side::Left, Side::Right].map(|side| create_paddle(&mut world, config, side));
        let ball = create_ball(&mut world, board.center(), config.ball_diameter());

        Self {
            config: config.clone(),
            board,
            world,
            ball,
            paddles,
            rng: GameRng::new(config.seed),
            reward: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ball(&self) -> Ball {
        self.read(self.ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.read(self.paddles[side.index()])
    }

    /// Scoring signal of the last tick: +1 right goal breached, -1 left, 0 rally
    pub fn reward(&self) -> i8 {
        self.reward
    }

    pub fn is_scored(&self) -> bool {
        self.reward != 0
    }

    /// Translate a paddle. Clamping happens on the next tick.
    pub fn move_paddle(&mut self, side: Side, delta: Vec2) {
        let mut paddle = self.paddle(side);
        paddle.move_by(delta);
        self.write(self.paddles[side.index()], paddle);
    }

    /// Overwrite the ball, e.g. to stage a scenario
    pub fn set_ball(&mut self, ball: Ball) {
        self.write(self.ball, ball);
    }

    /// Advance the simulation one tick. Returns `true` when a point was scored.
    ///
    /// After a scoring tick the environment must be reset; stepping again
    /// fails with [`SimError::ResetRequired`] and leaves the state untouched.
    pub fn time_step(&mut self) -> Result<bool, SimError> {
        if self.is_scored() {
            return Err(SimError::ResetRequired);
        }

        // 1. Move ball
        move_ball(&mut self.world, self.config.ball_speed);

        // 2. Clamp paddles, bounce off walls, detect goals
        clamp_paddles(&mut self.world, &self.board);
        self.reward = check_goals(&mut self.world, &self.board);

        // 3. Paddle bounces (may still turn a ball clamped this tick)
        paddle_bounces(&mut self.world);

        if self.is_scored() {
            debug!("Point scored, reward {} at {:?}", self.reward, self.ball().pos);
        }
        Ok(self.is_scored())
    }

    /// Re-centre ball and paddles and pick a fresh ball direction
    pub fn reset(&mut self) {
        let mut ball = self.ball();
        ball.reset(self.board.center(), &mut self.rng);
        self.write(self.ball, ball);

        for side in [Side::Left, Side::Right] {
            let mut paddle = self.paddle(side);
            paddle.place(self.config.paddle_spawn(side));
            self.write(self.paddles[side.index()], paddle);
        }

        self.reward = 0;
        debug!("Environment reset, ball direction {:?}", ball.dir);
    }

    fn read<T: hecs::Component + Copy>(&self, entity: Entity) -> T {
        *self.world.get::<&T>(entity).expect(OWNED)
    }

    fn write<T: hecs::Component>(&mut self, entity: Entity, value: T) {
        *self.world.get::<&mut T>(entity).expect(OWNED) = value;
    }
}

/// Helper to create a paddle entity at its spawn point
fn create_paddle(world: &mut World, config: &Config, side: Side) -> Entity {
    world.spawn((Paddle::new(
        side,
        config.paddle_spawn(side),
        config.paddle_length(),
        config.paddle_width(),
    ),))
}

/// Helper to create the ball entity, initially heading down-right
fn create_ball(world: &mut World, pos: Vec2, diameter: f32) -> Entity {
    world.spawn((Ball::new(pos, diameter),))
}
