//! Session State Machine
//!
//! Drives a [`Game`] from a fixed-interval ticker: waits while players get
//! ready, plays rallies, and pauses again after every point.

use std::time::Duration;

use log::info;

use crate::{Frame, Game, InputState, Params, PongError, StepOutcome};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Paused,
    Running,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    PlayersReady,
    PointScored,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: SessionState,
    pub to: SessionState,
    pub event: SessionEvent,
}

pub struct Session {
    game: Game,
    state: SessionState,
    ticks: u64,
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            state: SessionState::Paused,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Ticks handled so far, paused or not
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        self.game.input_mut()
    }

    pub fn can_transition(&self, event: SessionEvent) -> bool {
        self.next_state(event).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, event: SessionEvent) -> Transition {
        let from = self.state;
        let to = self.next_state(event).unwrap_or(from);
        self.state = to;
        Transition {
            success: to != from,
            from,
            to,
            event,
        }
    }

    fn next_state(&self, event: SessionEvent) -> Option<SessionState> {
        match (self.state, event) {
            (SessionState::Paused, SessionEvent::PlayersReady) => Some(SessionState::Running),
            (SessionState::Running, SessionEvent::PointScored) => Some(SessionState::Paused),
            _ => None,
        }
    }

    /// Advance one tick and return what to draw.
    ///
    /// Paused: poll readiness (picking up finished training rounds) and start
    /// once both players are ready. Running: step the game; a point resets
    /// it, unless it already restarted itself, and pauses the session.
    pub fn tick(&mut self) -> Result<Frame, PongError> {
        self.ticks += 1;

        match self.state {
            SessionState::Paused => {
                if self.game.poll_ready()? {
                    self.transition(SessionEvent::PlayersReady);
                    self.game.start();
                    info!("Players ready, rally starts at tick {}", self.ticks);
                }
            }
            SessionState::Running => {
                if let StepOutcome::Point { restarted, .. } = self.game.step()? {
                    if !restarted {
                        self.game.reset()?;
                    }
                    self.transition(SessionEvent::PointScored);
                }
            }
        }

        Ok(self.game.frame())
    }

    /// Period of the external ticker
    pub fn tick_interval() -> Duration {
        Duration::from_secs_f64(1.0 / Params::TICK_HZ as f64)
    }
}
