use crate::effect::EffectId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or decoding core state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A ring configuration violates an invariant.
    #[error("invalid ring config: {0}")]
    InvalidConfig(String),

    /// A persisted tag field is absent.
    #[error("missing tag field: \"{key}\"")]
    MissingField {
        /// The tag key that was not found.
        key: String,
    },

    /// A persisted tag field holds a value of the wrong shape.
    #[error("tag field \"{key}\" is not {expected}")]
    WrongShape {
        /// The tag key whose value was malformed.
        key: String,
        /// The shape the decoder expected, e.g. "an integer".
        expected: &'static str,
    },

    /// An effect id does not exist in the registry.
    #[error("unknown effect: {0}")]
    UnknownEffect(EffectId),

    /// A wearer with the same name already exists in the roster.
    #[error("wearer already exists: \"{0}\"")]
    DuplicateName(String),
}
