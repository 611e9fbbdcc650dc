//! # netctl Errors
//!
//! Error taxonomy shared by the netctl crates.
//!
//! - Uses `thiserror` for structured error definitions
//! - Every variant carries named fields so messages stay stable
//! - `CommandError` is what handlers return; `StorageError` is what datastore
//!   backends return and is wrapped by `CommandError::Store`

use thiserror::Error;

/// Errors surfaced by the `ipam` and `log-level` handlers.
///
/// Every error is terminal for the invocation: the binary prints the
/// message on one line and exits non-zero.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{message}")]
    ArgumentParse { message: String },

    #[error("config value is invalid '{value}'")]
    InvalidValue { value: String },

    /// `what` names the lookup table the value missed, e.g. "config name".
    #[error("unrecognised {what} '{name}'")]
    UnrecognizedName { what: String, name: String },

    /// Message is supplied verbatim by the component validator.
    #[error("{message}")]
    InvalidComponent { message: String },

    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: StorageError
    }
}

impl CommandError {
    /// Wrap a datastore failure with the operation that produced it.
    pub fn store(context: impl Into<String>, source: StorageError) -> Self {
        Self::Store {
            context: context.into(),
            source
        }
    }

    pub fn unrecognized(what: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnrecognizedName {
            what: what.into(),
            name: name.into()
        }
    }

    /// Short machine-friendly name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArgumentParse { .. } => "argument_parse",
            Self::InvalidValue { .. } => "invalid_value",
            Self::UnrecognizedName { .. } => "unrecognized_name",
            Self::InvalidComponent { .. } => "invalid_component",
            Self::Store { .. } => "store"
        }
    }
}

/// Datastore errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("resource does not exist: {kind}({name})")]
    NotFound { kind: String, name: String },

    #[error("resource already exists: {kind}({name})")]
    AlreadyExists { kind: String, name: String },

    #[error("datastore I/O on {path} failed: {reason}")]
    Io { path: String, reason: String },

    #[error("Serialization error: {error_type} - {reason}")]
    Serialization { error_type: String, reason: String },

    #[error("datastore type '{datastore_type}' is not supported")]
    Unsupported { datastore_type: String }
}

impl StorageError {
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into()
        }
    }

    pub fn already_exists(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind: kind.into(),
            name: name.into()
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = CommandError::InvalidValue {
            value: "9".to_string()
        };
        assert_eq!(err.to_string(), "config value is invalid '9'");
        assert_eq!(err.kind(), "invalid_value");
    }

    #[test]
    fn test_unrecognized_name_message() {
        let err = CommandError::UnrecognizedName {
            what: "config name".to_string(),
            name: "unknownKey".to_string()
        };
        assert_eq!(err.to_string(), "unrecognised config name 'unknownKey'");
    }

    #[test]
    fn test_invalid_component_is_verbatim() {
        let err = CommandError::InvalidComponent {
            message: "component 'bogus' is not valid".to_string()
        };
        assert_eq!(err.to_string(), "component 'bogus' is not valid");
    }

    #[test]
    fn test_store_error_wraps_source() {
        let err = CommandError::store(
            "failed to update DebuggingConfiguration",
            StorageError::Io {
                path: "/tmp/ds.json".to_string(),
                reason: "permission denied".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "failed to update DebuggingConfiguration: datastore I/O on /tmp/ds.json failed: \
             permission denied"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_not_found_helper() {
        let err = StorageError::not_found("DebuggingConfiguration", "default");
        assert!(err.is_not_found());
        assert!(!StorageError::already_exists("DebuggingConfiguration", "default").is_not_found());
    }
}
