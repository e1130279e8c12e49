use rw_core::wearer::WearerId;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can occur while driving a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A wearer referenced by a system does not exist in the roster.
    #[error("wearer not found in simulation: {0}")]
    WearerNotFound(WearerId),

    /// A system failed in a way it could describe only as text.
    #[error("system error: {0}")]
    SystemError(String),
}
