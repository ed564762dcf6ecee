//! Registry proxies.
//!
//! Entity builders never touch a registry directly. They receive a proxy
//! built fresh from the registry at the point of use:
//!
//! - [`TokenProxy`] turns a usage-name map into name tokens, so list and
//!   form layouts can reference declared fields by name.
//! - [`RegistryProxy`] turns a type-keyed registry into per-type
//!   constructors that stamp a definition with usage-site options.
//!
//! Both are snapshots: later changes to the source registry do not show up
//! in an existing proxy, and nothing done through a proxy writes back.

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::component::Options;
use crate::error::{AdmiralError, Result};
use crate::logging::Keys;
use crate::merge::merge_options;

/// A definition that can be stamped out by a [`RegistryProxy`].
pub trait Definition: Clone {
    /// Registry label used in error messages ("field", "view", ...).
    const KIND: &'static str;

    /// The definition's type name.
    fn name(&self) -> &str;

    /// The options/config payload.
    fn payload(&self) -> &Options;

    /// A copy of this definition carrying `payload` instead.
    fn with_payload(&self, payload: Options) -> Self;
}

/// Name tokens over a usage-name map.
///
/// `get("title")` yields `Some("title")` when `title` was declared and
/// `None` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenProxy {
    names: IndexSet<String>,
}

impl TokenProxy {
    /// An empty proxy.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build tokens from the keys of a usage-name map, in iteration order.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: keys.into_iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }

    /// The token for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// The token for `name`, or `NotFound`.
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .ok_or_else(|| AdmiralError::not_found("field", name))
    }

    /// All tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Per-type constructors over a type-keyed registry.
#[derive(Debug, Clone)]
pub struct RegistryProxy<D: Definition> {
    entries: IndexMap<String, D>,
}

impl<D: Definition> Default for RegistryProxy<D> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<D: Definition> RegistryProxy<D> {
    /// An empty proxy; every lookup yields `None`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot `(name, definition)` pairs into a fresh proxy.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a D)>,
        D: 'a,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, def)| (name.clone(), def.clone()))
                .collect(),
        }
    }

    /// A fresh definition for `name` with an empty payload.
    pub fn make(&self, name: &str) -> Option<D> {
        self.entries
            .get(name)
            .map(|def| def.with_payload(Options::new()))
    }

    /// A fresh definition for `name` whose payload is the registry entry's
    /// payload with `options` layered on top.
    pub fn make_with(&self, name: &str, options: Options) -> Option<D> {
        let def = self.entries.get(name)?;
        let keys: Vec<&String> = options.keys().collect();
        trace!(
            kind = D::KIND,
            usage = %name,
            definition = %def.name(),
            keys = %Keys(&keys),
            "stamping definition with options"
        );
        Some(def.with_payload(merge_options(def.payload().clone(), options)))
    }

    /// Like [`make`](Self::make) but fails with `NotFound` for absent names.
    pub fn require(&self, name: &str) -> Result<D> {
        self.make(name)
            .ok_or_else(|| AdmiralError::not_found(D::KIND, name))
    }

    /// Registered type names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    #[derive(Debug, Clone, PartialEq)]
    struct Stub {
        name: String,
        payload: Options,
    }

    impl Definition for Stub {
        const KIND: &'static str = "stub";

        fn name(&self) -> &str {
            &self.name
        }

        fn payload(&self) -> &Options {
            &self.payload
        }

        fn with_payload(&self, payload: Options) -> Self {
            Self {
                name: self.name.clone(),
                payload,
            }
        }
    }

    fn options(value: serde_json::Value) -> Options {
        value.as_object().cloned().unwrap()
    }

    fn registry() -> IndexMap<String, Stub> {
        let mut map = IndexMap::new();
        map.insert(
            "text".to_string(),
            Stub {
                name: "text".into(),
                payload: options(json!({"maxLength": 80, "trim": true})),
            },
        );
        map.insert(
            "number".to_string(),
            Stub {
                name: "number".into(),
                payload: Options::new(),
            },
        );
        map
    }

    #[test]
    fn token_proxy_yields_literal_names_in_order() {
        let proxy = TokenProxy::from_keys(["title", "body"]);
        assert_eq!(proxy.get("title"), Some("title"));
        assert_eq!(proxy.get("missing"), None);
        assert_eq!(proxy.iter().collect::<Vec<_>>(), vec!["title", "body"]);
    }

    #[test]
    fn token_proxy_require_reports_missing() {
        let proxy = TokenProxy::empty();
        let err = proxy.require("title").unwrap_err();
        assert_eq!(err.to_string(), "field not found: title");
    }

    #[test]
    fn make_without_options_clears_payload() {
        let reg = registry();
        let proxy = RegistryProxy::from_entries(&reg);
        let def = proxy.make("text").unwrap();
        assert_eq!(def.name, "text");
        assert!(def.payload.is_empty());
    }

    #[test]
    fn make_with_unions_payload_new_keys_winning() {
        let reg = registry();
        let proxy = RegistryProxy::from_entries(&reg);
        let def = proxy
            .make_with("text", options(json!({"maxLength": 120, "required": true})))
            .unwrap();
        assert_eq!(def.payload["maxLength"], json!(120));
        assert_eq!(def.payload["trim"], json!(true));
        assert_eq!(def.payload["required"], json!(true));
    }

    #[test]
    fn calls_never_alias() {
        let reg = registry();
        let proxy = RegistryProxy::from_entries(&reg);
        let mut first = proxy.make_with("text", options(json!({"a": 1}))).unwrap();
        let second = proxy.make_with("text", options(json!({"a": 1}))).unwrap();
        assert_eq!(first, second);
        first.payload.insert("a".into(), json!(2));
        assert_eq!(second.payload["a"], json!(1));
        // registry entry untouched
        assert_eq!(reg["text"].payload["maxLength"], json!(80));
    }

    #[test]
    fn missing_names_degrade_to_none() {
        let proxy: RegistryProxy<Stub> = RegistryProxy::empty();
        assert!(proxy.make("text").is_none());
        assert!(proxy.make_with("text", Options::new()).is_none());
        assert!(proxy.is_empty());
        let err = proxy.require("text").unwrap_err();
        assert_eq!(err.to_string(), "stub not found: text");
    }

    #[test]
    #[traced_test]
    fn make_with_traces_stamped_definition() {
        let reg = registry();
        let proxy = RegistryProxy::from_entries(&reg);
        let _ = proxy.make_with("text", options(json!({"required": true})));
        assert!(logs_contain("stamping definition with options"));
        assert!(logs_contain("definition=text"));
    }

    #[test]
    fn names_follow_registry_order() {
        let reg = registry();
        let proxy = RegistryProxy::from_entries(&reg);
        assert_eq!(proxy.names().collect::<Vec<_>>(), vec!["text", "number"]);
        assert!(proxy.contains("number"));
        assert_eq!(proxy.len(), 2);
    }
}
