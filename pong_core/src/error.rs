/// Errors raised by the physics simulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("a point was scored this rally; reset the environment before stepping again")]
    ResetRequired,
}

/// Errors raised while training a policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    #[error("a training round is already in flight")]
    AlreadyTraining,

    #[error("training worker stopped without reporting a result")]
    WorkerLost,

    #[error("value model error: {0}")]
    Model(String),
}

/// Errors that can occur when validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level error for driving a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PongError {
    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("training error: {0}")]
    Train(#[from] TrainError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
