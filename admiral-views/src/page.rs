//! Standalone page definitions.

use admiral_common::{Builder, ComponentRef, Declared, Definition, Options};
use serde::{Deserialize, Serialize};

/// A standalone screen. `path` is the route; when absent the renderer
/// derives one from `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageDefinition {
    pub name: String,
    pub component: ComponentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub config: Options,
}

impl Definition for PageDefinition {
    const KIND: &'static str = "page";

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

#[derive(Debug, Clone, PartialEq)]
pub struct PageBuilder {
    state: PageDefinition,
}

impl PageBuilder {
    pub fn new(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            state: PageDefinition {
                name: name.into(),
                component: component.into(),
                path: None,
                config: Options::new(),
            },
        }
    }

    pub fn component(&self, component: impl Into<ComponentRef>) -> Self {
        let mut state = self.state.clone();
        state.component = component.into();
        Self { state }
    }

    pub fn path(&self, path: impl Into<String>) -> Self {
        let mut state = self.state.clone();
        state.path = Some(path.into());
        Self { state }
    }

    /// Replace the config payload wholesale.
    pub fn config(&self, config: Options) -> Self {
        let mut state = self.state.clone();
        state.config = config;
        Self { state }
    }

    pub fn build(&self) -> PageDefinition {
        self.state.clone()
    }
}

impl Builder for PageBuilder {
    type State = PageDefinition;

    fn state(&self) -> &PageDefinition {
        &self.state
    }
}

impl From<PageBuilder> for Declared<PageBuilder> {
    fn from(builder: PageBuilder) -> Self {
        Declared::Builder(builder)
    }
}

impl From<PageDefinition> for Declared<PageBuilder> {
    fn from(def: PageDefinition) -> Self {
        Declared::Plain(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_optional() {
        let page = PageBuilder::new("settings", "SettingsPage");
        assert!(page.build().path.is_none());
        let routed = page.path("/settings");
        assert_eq!(routed.build().path.as_deref(), Some("/settings"));
        assert!(page.state().path.is_none());
    }

    #[test]
    fn path_omitted_from_json_when_unset() {
        let def = PageBuilder::new("settings", "SettingsPage").build();
        let json = serde_json::to_string(&def).unwrap();
        assert!(!json.contains("path"));
    }
}
