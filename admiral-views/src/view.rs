//! List and edit view definitions.

use std::fmt;
use std::str::FromStr;

use admiral_common::{AdmiralError, Builder, ComponentRef, Declared, Definition, Options};
use serde::{Deserialize, Serialize};

/// Which bucket a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    List,
    Edit,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = AdmiralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "edit" => Ok(Self::Edit),
            other => Err(AdmiralError::InvalidViewKind {
                value: other.to_string(),
            }),
        }
    }
}

/// A view type bound to a fixed kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewDefinition {
    pub name: String,
    pub kind: ViewKind,
    pub component: ComponentRef,
    #[serde(default)]
    pub config: Options,
}

impl Definition for ViewDefinition {
    const KIND: &'static str = "view";

    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> &Options {
        &self.config
    }

    fn with_payload(&self, payload: Options) -> Self {
        Self {
            config: payload,
            ..self.clone()
        }
    }
}

/// Immutable builder for a [`ViewDefinition`].
///
/// There is no way to change `kind` after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBuilder {
    state: ViewDefinition,
}

impl ViewBuilder {
    fn new(name: impl Into<String>, kind: ViewKind, component: impl Into<ComponentRef>) -> Self {
        Self {
            state: ViewDefinition {
                name: name.into(),
                kind,
                component: component.into(),
                config: Options::new(),
            },
        }
    }

    /// A list view (tables, grids, boards).
    pub fn list(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self::new(name, ViewKind::List, component)
    }

    /// An edit view (forms).
    pub fn edit(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self::new(name, ViewKind::Edit, component)
    }

    pub fn component(&self, component: impl Into<ComponentRef>) -> Self {
        let mut state = self.state.clone();
        state.component = component.into();
        Self { state }
    }

    /// Replace the config payload wholesale.
    pub fn config(&self, config: Options) -> Self {
        let mut state = self.state.clone();
        state.config = config;
        Self { state }
    }

    pub fn kind(&self) -> ViewKind {
        self.state.kind
    }

    pub fn build(&self) -> ViewDefinition {
        self.state.clone()
    }
}

impl Builder for ViewBuilder {
    type State = ViewDefinition;

    fn state(&self) -> &ViewDefinition {
        &self.state
    }
}

impl From<ViewBuilder> for Declared<ViewBuilder> {
    fn from(builder: ViewBuilder) -> Self {
        Declared::Builder(builder)
    }
}

impl From<ViewDefinition> for Declared<ViewBuilder> {
    fn from(def: ViewDefinition) -> Self {
        Declared::Plain(def)
    }
}
