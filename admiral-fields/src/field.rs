//! Field definitions and their builder.

use admiral_common::{Builder, ComponentRef, Declared, Definition, Options};
use serde::{Deserialize, Serialize};

/// One field type: render component, optional cell component, options.
///
/// Identity is `name`, the type name, not the name a collection uses for
/// a particular field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub component: ComponentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_component: Option<ComponentRef>,
    #[serde(default)]
    pub options: Options,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            name: name.into(),
            component: component.into(),
            cell_component: None,
            options: Options::new(),
        }
    }
}

impl Definition for FieldDefinition {
    const KIND: &'static str = "field";

    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> &Options {
        &self.options
    }

    fn with_payload(&self, payload: Options) -> Self {
        Self {
            options: payload,
            ..self.clone()
        }
    }
}

/// Immutable builder for a [`FieldDefinition`].
///
/// Every method returns a new builder; the receiver is left unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBuilder {
    state: FieldDefinition,
}

impl FieldBuilder {
    pub fn new(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            state: FieldDefinition::new(name, component),
        }
    }

    /// Replace the render component.
    pub fn component(&self, component: impl Into<ComponentRef>) -> Self {
        let mut state = self.state.clone();
        state.component = component.into();
        Self { state }
    }

    /// Set the table-cell component.
    pub fn cell(&self, component: impl Into<ComponentRef>) -> Self {
        let mut state = self.state.clone();
        state.cell_component = Some(component.into());
        Self { state }
    }

    /// Replace the options payload wholesale.
    pub fn options(&self, options: Options) -> Self {
        let mut state = self.state.clone();
        state.options = options;
        Self { state }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    /// The finished definition.
    pub fn build(&self) -> FieldDefinition {
        self.state.clone()
    }
}

impl Builder for FieldBuilder {
    type State = FieldDefinition;

    fn state(&self) -> &FieldDefinition {
        &self.state
    }
}

impl From<FieldBuilder> for Declared<FieldBuilder> {
    fn from(builder: FieldBuilder) -> Self {
        Declared::Builder(builder)
    }
}

impl From<FieldDefinition> for Declared<FieldBuilder> {
    fn from(def: FieldDefinition) -> Self {
        Declared::Plain(def)
    }
}
