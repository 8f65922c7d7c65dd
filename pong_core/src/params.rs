/// Tuning parameters for the self-play Pong match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;

    // Paddle (fractions of the board)
    pub const PADDLE_X_FRACTION: f32 = 0.05; // distance from the goal line
    pub const PADDLE_LENGTH_FRACTION: f32 = 0.2; // of board height
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.01; // of board width
    pub const PADDLE_SENSIBILITY: f32 = 20.0; // units per action

    // Ball
    pub const BALL_DIAMETER_FRACTION: f32 = 0.015; // of board height
    pub const BALL_SPEED: f32 = 8.0; // units per tick

    // Experience memory
    pub const MAX_MEMORY: usize = 1_000_000;
    pub const DISCOUNT: f32 = 0.8;
    pub const REWARD_HORIZON: usize = 500; // steps back from the newest entry

    // Learning agent
    pub const EPSILON: f32 = 0.2;
    pub const EPSILON_DECAY: f32 = 1.1; // divisor applied after each training round
    pub const TRAIN_EPOCHS: usize = 50;
    pub const LEARNING_RATE: f64 = 1e-2;

    // Driver
    pub const TICK_HZ: u32 = 60;
    pub const RNG_SEED: u64 = 12345;
}
