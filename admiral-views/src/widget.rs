//! Dashboard widget definitions.

use admiral_common::{Builder, ComponentRef, Declared, Definition, Options};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetDefinition {
    pub name: String,
    pub component: ComponentRef,
    #[serde(default)]
    pub config: Options,
}

impl Definition for WidgetDefinition {
    const KIND: &'static str = "widget";

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
pub struct WidgetBuilder {
    state: WidgetDefinition,
}

impl WidgetBuilder {
    pub fn new(name: impl Into<String>, component: impl Into<ComponentRef>) -> Self {
        Self {
            state: WidgetDefinition {
                name: name.into(),
                component: component.into(),
                config: Options::new(),
            },
        }
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

    pub fn build(&self) -> WidgetDefinition {
        self.state.clone()
    }
}

impl Builder for WidgetBuilder {
    type State = WidgetDefinition;

    fn state(&self) -> &WidgetDefinition {
        &self.state
    }
}

impl From<WidgetBuilder> for Declared<WidgetBuilder> {
    fn from(builder: WidgetBuilder) -> Self {
        Declared::Builder(builder)
    }
}

impl From<WidgetDefinition> for Declared<WidgetBuilder> {
    fn from(def: WidgetDefinition) -> Self {
        Declared::Plain(def)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_is_replaced_not_merged() {
        let w = WidgetBuilder::new("stats", "StatsCard")
            .config(json!({"metric": "posts"}).as_object().cloned().unwrap())
            .config(json!({"period": "7d"}).as_object().cloned().unwrap());
        let def = w.build();
        assert!(def.config.get("metric").is_none());
        assert_eq!(def.config["period"], json!("7d"));
    }

    #[test]
    fn original_is_unchanged() {
        let base = WidgetBuilder::new("stats", "StatsCard");
        let _other = base.component("Chart");
        assert_eq!(base.state().component.as_str(), "StatsCard");
    }
}
