use crate::{Action, Config, Environment, Experience, Memory, Side, StateEncoding, STATE_LEN};

/// One player's place at the table: which paddle it drives, how it sees the
/// board, and the experience it has collected.
#[derive(Debug, Clone)]
pub struct Seat {
    side: Side,
    sensibility: f32,
    encoding: StateEncoding,
    shaping: bool,
    memory: Memory,
}

impl Seat {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            sensibility: config.sensibility,
            encoding: config.state_encoding,
            shaping: config.reward_shaping,
            memory: Memory::with_discount(
                config.max_memory,
                config.discount,
                config.reward_horizon,
            ),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn sensibility(&self) -> f32 {
        self.sensibility
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Own paddle, opponent paddle, ball; each as (x, y, x0, y0).
    ///
    /// The right seat sees the board mirrored so both seats perceive
    /// themselves on the left, facing right.
    pub fn get_state(&self, env: &Environment) -> Vec<f32> {
        let board = env.board();
        let (width, height) = (board.width(), board.height());
        let own = env.paddle(self.side);
        let opponent = env.paddle(self.side.opponent());
        let ball = env.ball();
        let mirrored = self.side.orientation() < 0;

        let mut state = Vec::with_capacity(STATE_LEN);
        for point in [
            own.pos,
            own.prev,
            opponent.pos,
            opponent.prev,
            ball.pos,
            ball.prev,
        ] {
            let x = if mirrored { width - point.x } else { point.x };
            match self.encoding {
                StateEncoding::Normalized => {
                    state.push(x / width);
                    state.push(point.y / height);
                }
                StateEncoding::Raw => {
                    state.push(x);
                    state.push(point.y);
                }
            }
        }
        state
    }

    /// Score reward from this seat's point of view, plus the optional
    /// vertical-tracking penalty
    pub fn reward(&self, env: &Environment) -> f32 {
        let mut reward = (self.side.orientation() * env.reward()) as f32;
        if self.shaping {
            let paddle = env.paddle(self.side);
            let ball = env.ball();
            reward += -(paddle.pos.y - ball.pos.y).abs() / env.board().height();
        }
        reward
    }

    /// Record the state before `action` is applied, crediting any reward to
    /// recent history first
    pub fn snap_shot(&mut self, env: &Environment, action: Action) {
        let state = self.get_state(env);
        let reward = self.reward(env);
        if reward != 0.0 {
            self.memory.propagate_reward(reward);
        }
        self.memory.push(Experience::new(state, action, reward));
    }

    /// Move the paddle for `action`
    pub fn apply(&self, env: &mut Environment, action: Action) {
        if let Some(delta) = action.displacement(self.side.orientation(), self.sensibility) {
            env.move_paddle(self.side, delta);
        }
    }
}
