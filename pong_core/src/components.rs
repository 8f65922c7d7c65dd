use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which goal a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,  // faces right
    Right, // faces left
}

impl Side {
    /// +1 for the left paddle, -1 for the right paddle
    pub fn orientation(self) -> i8 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Discrete paddle action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    Stay = 0,
    Down = 1,     // +y
    Up = 2,       // -y
    Forward = 3,  // towards the opponent
    Backward = 4, // towards own goal
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Stay,
        Action::Down,
        Action::Up,
        Action::Forward,
        Action::Backward,
    ];

    /// Actions the learning agent chooses between
    pub const VERTICAL: [Action; 3] = [Action::Stay, Action::Down, Action::Up];

    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<Action> {
        Self::ALL.get(id).copied()
    }

    /// Paddle displacement for this action, `None` when the paddle stays put
    pub fn displacement(self, orientation: i8, sensibility: f32) -> Option<Vec2> {
        let forward = orientation as f32 * sensibility;
        match self {
            Action::Stay => None,
            Action::Down => Some(Vec2::new(0.0, sensibility)),
            Action::Up => Some(Vec2::new(0.0, -sensibility)),
            Action::Forward => Some(Vec2::new(forward, 0.0)),
            Action::Backward => Some(Vec2::new(-forward, 0.0)),
        }
    }
}

/// Paddle component - a rectangle centred on `pos`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub prev: Vec2, // position on the previous tick
    pub length: f32, // extent along y
    pub width: f32,  // extent along x
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, length: f32, width: f32) -> Self {
        Self {
            side,
            pos,
            prev: pos,
            length,
            width,
        }
    }

    pub fn orientation(&self) -> i8 {
        self.side.orientation()
    }

    /// Translate the paddle, remembering where it was. Bounds are the board's job.
    pub fn move_by(&mut self, delta: Vec2) {
        self.prev = self.pos;
        self.pos += delta;
    }

    /// Teleport with zero implied velocity
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev = pos;
    }

    fn is_within_x(&self, ball: &Ball) -> bool {
        ball.pos.x < self.pos.x + self.width / 2.0 && ball.pos.x > self.pos.x - self.width / 2.0
    }

    fn is_within_y(&self, ball: &Ball) -> bool {
        ball.pos.y < self.pos.y + self.length / 2.0 && ball.pos.y > self.pos.y - self.length / 2.0
    }

    /// Bounce the ball if its centre is inside the paddle.
    ///
    /// On contact the ball is snapped onto the paddle's x so it cannot tunnel
    /// through, and its x direction is inverted. Returns the paddle orientation
    /// when the ball now travels the way the paddle faces, otherwise 0.
    pub fn interact(&self, ball: &mut Ball) -> i8 {
        if !(self.is_within_x(ball) && self.is_within_y(ball)) {
            return 0;
        }

        ball.pos.x = self.pos.x;
        ball.dir.x = -ball.dir.x;

        let orientation = self.orientation();
        if (ball.dir.x > 0.0) == (orientation > 0) {
            orientation
        } else {
            0
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub prev: Vec2,
    pub dir: Vec2, // each component is +1 or -1
    pub diameter: f32,
}

impl Ball {
    pub fn new(pos: Vec2, diameter: f32) -> Self {
        Self {
            pos,
            prev: pos,
            dir: Vec2::ONE,
            diameter,
        }
    }

    /// Advance one tick at `speed` units per axis
    pub fn update(&mut self, speed: f32) {
        self.prev = self.pos;
        self.pos += self.dir * speed;
    }

    /// Reset ball to `center` with a coin flip per axis
    pub fn reset(&mut self, center: Vec2, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = center;
        self.prev = center;

        let ux = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let uy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.dir = Vec2::new(ux, uy);
    }
}
