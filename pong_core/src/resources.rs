use crate::Side;

/// Running match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub balance: i32, // positive favours the left player
    pub left: u32,    // points won by the left player
    pub right: u32,   // points won by the right player
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick's environment reward into the score
    pub fn record(&mut self, reward: i8) {
        self.balance += reward as i32;
        match reward.signum() {
            1 => self.left += 1,
            -1 => self.right += 1,
            _ => {}
        }
    }

    pub fn leader(&self) -> Option<Side> {
        match self.balance.signum() {
            1 => Some(Side::Left),
            -1 => Some(Side::Right),
            _ => None,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::Params::RNG_SEED)
    }
}
