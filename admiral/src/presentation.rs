//! Presentation singletons: branding, dashboard, locale.
//!
//! These are host-application settings. They are set with dedicated
//! setters on [`AdminBuilder`](crate::AdminBuilder) and are never touched by
//! module combination.

use std::borrow::Cow;

use admiral_common::{ComponentRef, Options, Registry, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ComponentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Branding {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_logo(mut self, logo: impl Into<ComponentRef>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }
}

/// A widget placed on the dashboard, by registered widget name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardWidget {
    pub widget: String,
    #[serde(default)]
    pub config: Options,
}

impl DashboardWidget {
    pub fn new(widget: impl Into<String>) -> Self {
        Self {
            widget: widget.into(),
            config: Options::new(),
        }
    }

    pub fn with_config(mut self, config: Options) -> Self {
        self.config = config;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub widgets: Vec<DashboardWidget>,
}

impl Dashboard {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            widgets: Vec::new(),
        }
    }

    pub fn widget(mut self, widget: DashboardWidget) -> Self {
        self.widgets.push(widget);
        self
    }
}

/// Locale settings. Unlike branding this merges key by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl LocaleConfig {
    pub fn with_default(mut self, code: impl Into<String>) -> Self {
        self.default = Some(code.into());
        self
    }

    pub fn with_available<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_fallback(mut self, code: impl Into<String>) -> Self {
        self.fallback = Some(code.into());
        self
    }

    /// Keys set on `overlay` win; unset keys keep the current value.
    pub fn merge(&self, overlay: LocaleConfig) -> Self {
        Self {
            default: overlay.default.or_else(|| self.default.clone()),
            available: overlay.available.or_else(|| self.available.clone()),
            fallback: overlay.fallback.or_else(|| self.fallback.clone()),
        }
    }
}

const LOCALE_LABELS: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("ja", "日本語"),
    ("zh", "中文"),
];

/// Human label for a locale code; unknown codes come back uppercased.
pub fn locale_label(code: &str) -> Cow<'static, str> {
    LOCALE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| Cow::Borrowed(*label))
        .unwrap_or_else(|| Cow::Owned(code.to_uppercase()))
}

/// A presentation document, typically shipped alongside the host app.
///
/// ```yaml
/// branding:
///   name: Acme Admin
/// locale:
///   default: en
///   available: [en, fr]
/// default_views:
///   list: table
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PresentationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleConfig>,
    #[serde(default)]
    pub default_views: Registry<String>,
}

impl PresentationConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", "English")]
    #[case("fr", "Français")]
    #[case("ja", "日本語")]
    #[case("xx", "XX")]
    #[case("pt-br", "PT-BR")]
    fn locale_labels(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(locale_label(code), expected);
    }

    #[test]
    fn locale_merge_is_per_key() {
        let base = LocaleConfig::default()
            .with_default("en")
            .with_available(["en", "fr"]);
        let merged = base.merge(LocaleConfig::default().with_default("fr"));
        assert_eq!(merged.default.as_deref(), Some("fr"));
        assert_eq!(
            merged.available,
            Some(vec!["en".to_string(), "fr".to_string()])
        );
        assert!(merged.fallback.is_none());
    }

    #[test]
    fn presentation_from_yaml() {
        let config = PresentationConfig::from_yaml_str(
            r##"
branding:
  name: Acme Admin
  accent: "#ff6600"
dashboard:
  title: Overview
  widgets:
    - widget: stats
      config:
        metric: posts
locale:
  default: en
default_views:
  list: table
"##,
        )
        .unwrap();
        let branding = config.branding.unwrap();
        assert_eq!(branding.name.as_deref(), Some("Acme Admin"));
        assert_eq!(branding.accent.as_deref(), Some("#ff6600"));
        let dashboard = config.dashboard.unwrap();
        assert_eq!(dashboard.widgets[0].widget, "stats");
        assert_eq!(config.locale.unwrap().default.as_deref(), Some("en"));
        assert_eq!(config.default_views["list"], "table");
    }

    #[test]
    fn presentation_from_json() {
        let config = PresentationConfig::from_json_str(r#"{"branding": {"name": "B"}}"#).unwrap();
        assert_eq!(config.branding.unwrap().name.as_deref(), Some("B"));
        assert!(config.dashboard.is_none());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = PresentationConfig::from_yaml_str("branding: [unclosed").unwrap_err();
        assert!(matches!(err, admiral_common::AdmiralError::Yaml(_)));
    }
}
