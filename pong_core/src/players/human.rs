use log::debug;

use crate::{Action, Config, InputState, Memory, Player, PlayerKind, Seat, Side, TrainError};

/// Keyboard-driven player. Waits for a continue press before every rally.
pub struct HumanPlayer {
    seat: Seat,
    ready: bool,
}

impl HumanPlayer {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            seat: Seat::new(side, config),
            ready: false,
        }
    }
}

impl Player for HumanPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Seat {
        &mut self.seat
    }

    fn choose_action(&mut self, _state: &[f32], input: &InputState) -> Action {
        input.selected()
    }

    /// Humans don't fit anything; they just pause until they press continue
    fn train(&mut self, _opponent: &Memory, _epochs: usize) -> Result<(), TrainError> {
        self.ready = false;
        Ok(())
    }

    fn poll_ready(&mut self, input: &mut InputState) -> Result<bool, TrainError> {
        if !self.ready && input.take_continue() {
            debug!("{:?} human ready", self.seat.side());
            self.ready = true;
        }
        Ok(self.ready)
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
