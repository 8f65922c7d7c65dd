//! Self-play Pong: a deterministic board simulation, pluggable players that
//! learn from each other's experience, and a tick-driven session driver.

pub mod board;
pub mod components;
pub mod config;
pub mod environment;
pub mod error;
pub mod frame;
pub mod game;
pub mod input;
pub mod memory;
pub mod model;
pub mod params;
pub mod players;
pub mod resources;
pub mod session;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use environment::*;
pub use error::*;
pub use frame::*;
pub use game::*;
pub use input::*;
pub use memory::*;
pub use model::*;
pub use params::*;
pub use players::*;
pub use resources::*;
pub use session::*;
