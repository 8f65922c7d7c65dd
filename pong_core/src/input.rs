//! Keyboard input state read by the human policy

use crate::Action;

/// Keys the match reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Continue,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Key {
        match name {
            "ArrowUp" | "w" | "W" => Key::Up,
            "ArrowDown" | "s" | "S" => Key::Down,
            " " | "Space" | "Spacebar" => Key::Continue,
            _ => Key::Other,
        }
    }
}

/// Selected action slot plus a latched "continue" trigger.
///
/// The surrounding application feeds key events in; the human player reads the
/// slot once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    selected: Action,
    continue_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.selected = Action::Up,
            Key::Down => self.selected = Action::Down,
            Key::Continue => self.continue_pressed = true,
            Key::Other => {}
        }
    }

    /// Handle key up event. Releasing any key stops the paddle.
    pub fn key_up(&mut self, _key: Key) {
        self.selected = Action::Stay;
    }

    pub fn selected(&self) -> Action {
        self.selected
    }

    pub fn press_continue(&mut self) {
        self.continue_pressed = true;
    }

    /// Consume a pending continue press
    pub fn take_continue(&mut self) -> bool {
        std::mem::take(&mut self.continue_pressed)
    }
}
