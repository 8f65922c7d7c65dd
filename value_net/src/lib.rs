//! Burn-backed value model for the self-play Pong agents.
//!
//! [`MlpValueModel`] implements [`pong_core::ValueModel`] with a small dense
//! network trained by full-batch Adam on mean squared error.

pub mod model;
pub mod network;

pub use model::*;
pub use network::*;
