use thiserror::Error;

/// Every failure a session operation can surface to its caller.
///
/// Errors are local to one operation: the collection it targeted is left as it
/// was before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing, empty, or held a value outside its domain.
    #[error("Validation error on `{field}`: {reason}")]
    Validation {
        /// Name of the offending input field
        field: &'static str,
        /// Human-readable description of what was wrong
        reason: String,
    },

    /// An update, delete or payment referenced an id that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. `"Vendor"`
        entity: &'static str,
        /// The id that failed to resolve
        id: String,
    },

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Shorthand for a required field that was left empty.
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::Validation {
            field,
            reason: "is required".to_string(),
        }
    }

    /// Shorthand for a field whose value could not be accepted.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for an id lookup that came up empty.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
