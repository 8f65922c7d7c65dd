pub mod agent;
pub mod human;
pub mod random;
pub mod seat;

pub use agent::*;
pub use human::*;
pub use random::*;
pub use seat::*;

use crate::{Action, Environment, InputState, Memory, Side, TrainError};

/// Class label shown next to each paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
    Agent,
}

impl PlayerKind {
    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Random => "Random",
            PlayerKind::Agent => "AI",
        }
    }
}

/// A policy driving one paddle.
///
/// Bookkeeping (state encoding, reward, memory, movement) lives in the
/// player's [`Seat`]; implementations only decide actions and how they learn.
pub trait Player {
    fn kind(&self) -> PlayerKind;

    fn seat(&self) -> &Seat;

    fn seat_mut(&mut self) -> &mut Seat;

    /// Pick an action for the encoded `state`
    fn choose_action(&mut self, state: &[f32], input: &InputState) -> Action;

    /// Start learning from own and opponent experience. Returns immediately;
    /// the player is not ready until [`Player::poll_ready`] reports completion.
    fn train(&mut self, opponent: &Memory, epochs: usize) -> Result<(), TrainError>;

    /// Observe pending training or input and report readiness
    fn poll_ready(&mut self, input: &mut InputState) -> Result<bool, TrainError>;

    fn is_ready(&self) -> bool;

    fn side(&self) -> Side {
        self.seat().side()
    }

    fn memory(&self) -> &Memory {
        self.seat().memory()
    }

    /// Read the state, choose, record the pre-move snapshot, then move
    fn perform_action(&mut self, env: &mut Environment, input: &InputState) -> Action {
        let state = self.seat().get_state(env);
        let action = self.choose_action(&state, input);
        let seat = self.seat_mut();
        seat.snap_shot(env, action);
        seat.apply(env, action);
        action
    }
}
