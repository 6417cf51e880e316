use thiserror::Error;

/// Failure of a simulation step. A step that returns an error has not
/// mutated the world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Static setup is wrong: week tables, zone sizes, week numbers.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller drove the engine out of protocol.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A required world/season/registration is missing.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
}

impl SimulationError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SimulationError::Configuration(message.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        SimulationError::InvariantViolation(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        SimulationError::DataUnavailable(message.into())
    }
}

pub type SimulationResult<T> = Result<T, SimulationError>;
