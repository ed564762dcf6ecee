//! Error types for admin descriptor composition

use thiserror::Error;

/// Result type for Admiral operations
pub type Result<T> = std::result::Result<T, AdmiralError>;

/// Errors that can occur while composing or reading an admin descriptor.
///
/// Composition itself is total: absent names degrade to `None` or empty
/// proxies. These variants only surface from the explicit `require*`
/// lookups, view-kind parsing, and (de)serialization.
#[derive(Debug, Error)]
pub enum AdmiralError {
    /// A named entry is absent from its registry
    #[error("{kind} not found: {name}")]
    NotFound { kind: String, name: String },

    /// A view kind string was neither `list` nor `edit`
    #[error("invalid view kind '{value}', expected 'list' or 'edit'")]
    InvalidViewKind { value: String },

    /// YAML (de)serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdmiralError {
    /// Build a `NotFound` error for the given registry kind.
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdmiralError::not_found("collection", "posts");
        assert_eq!(err.to_string(), "collection not found: posts");
    }

    #[test]
    fn test_invalid_view_kind() {
        let err = AdmiralError::InvalidViewKind {
            value: "grid".into(),
        };
        assert!(err.to_string().contains("grid"));
        assert!(err.to_string().contains("'list' or 'edit'"));
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AdmiralError = json_err.into();
        assert!(matches!(err, AdmiralError::Json(_)));
    }
}
