//! Opaque references handed through to the rendering layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Option/config payload attached to definitions.
///
/// Never interpreted by the composition core; only shallow-merged.
pub type Options = serde_json::Map<String, serde_json::Value>;

/// An opaque reference to a render component or icon.
///
/// The core only stores and copies these; resolving the identifier to an
/// actual component is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Create a reference from a component identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The component identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ComponentRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_ref_serializes_as_plain_string() {
        let c = ComponentRef::from("TextInput");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"TextInput\"");
        assert_eq!(c.to_string(), "TextInput");
    }
}
