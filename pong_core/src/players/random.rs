use rand::Rng;

use crate::{Action, Config, GameRng, InputState, Memory, Player, PlayerKind, Seat, Side, TrainError};

/// Uniformly random player over all five actions. Never learns.
pub struct RandomPlayer {
    seat: Seat,
    rng: GameRng,
}

impl RandomPlayer {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            seat: Seat::new(side, config),
            rng: GameRng::new(config.seed.wrapping_add(1 + side.index() as u64)),
        }
    }
}

impl Player for RandomPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn choose_action(&mut self, _state: &[f32], _input: &InputState) -> Action {
        Action::ALL[self.rng.0.gen_range(0..Action::ALL.len())]
    }

    /// Nothing to fit; stays ready
    fn train(&mut self, _opponent: &Memory, _epochs: usize) -> Result<(), TrainError> {
        Ok(())
    }

    fn poll_ready(&mut self, _input: &mut InputState) -> Result<bool, TrainError> {
        Ok(true)
    }

    fn is_ready(&self) -> bool {
        true
    }
}
