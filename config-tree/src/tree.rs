use std::fmt::{self, Display, Formatter};

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

static NULL: ConfigNode = ConfigNode::Null;

/// A leaf value in a configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Interpret the value as an on/off switch.
    ///
    /// Configuration dialects spell "enabled" in several ways (`on`, `true`,
    /// `yes`, `1`); anything else reads as off.
    pub fn is_on(&self) -> bool {
        match self {
            Scalar::Bool(value) => *value,
            Scalar::Int(value) => *value != 0,
            Scalar::Float(value) => *value != 0.0,
            Scalar::Str(value) => matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "on" | "true" | "yes" | "enable" | "enabled" | "1"
            ),
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Str(value) => f.write_str(value),
        }
    }
}

/// A generic configuration tree node.
///
/// Mappings keep their keys in document order, which the extraction rules
/// rely on ("first declared domain", "first breakout value").
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigNode {
    /// Explicit null, or a value that was never there.
    #[default]
    Null,
    Scalar(Scalar),
    Seq(Vec<ConfigNode>),
    Map(Vec<(String, ConfigNode)>),
}

impl ConfigNode {
    /// Build a string scalar node.
    pub fn text_value(value: impl Into<String>) -> Self {
        ConfigNode::Scalar(Scalar::Str(value.into()))
    }

    /// Return the child stored under `key`.
    ///
    /// Mappings are looked up by key. Sequences accept a decimal index, so
    /// `"0"` addresses the first declared item. Scalars and nulls have no
    /// children.
    pub fn get_child(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            ConfigNode::Seq(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            ConfigNode::Null | ConfigNode::Scalar(_) => None,
        }
    }

    /// Walk a nested child path and return the node at its end.
    ///
    /// An empty path returns `self`. Any missing segment, or a segment that
    /// lands on a scalar where a mapping was expected, yields `None`.
    pub fn get(&self, path: &[&str]) -> Option<&ConfigNode> {
        let mut current = self;
        for segment in path {
            current = current.get_child(segment)?;
        }
        Some(current)
    }

    /// Like [`ConfigNode::get`], but return `default` when the path is absent.
    pub fn get_or<'a>(&'a self, path: &[&str], default: &'a ConfigNode) -> &'a ConfigNode {
        self.get(path).unwrap_or(default)
    }

    /// Like [`ConfigNode::get`], but return a shared null node when absent.
    pub fn node(&self, path: &[&str]) -> &ConfigNode {
        self.get_or(path, &NULL)
    }

    /// Whether the path resolves to anything, including an explicit null.
    pub fn has(&self, path: &[&str]) -> bool {
        self.get(path).is_some()
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ConfigNode::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigNode::Null)
    }

    /// Textual value of the scalar at `path`, or an empty string.
    pub fn text(&self, path: &[&str]) -> String {
        self.text_or(path, "")
    }

    /// Textual value of the scalar at `path`, or `default`.
    pub fn text_or(&self, path: &[&str], default: &str) -> String {
        self.get(path)
            .and_then(ConfigNode::as_scalar)
            .map(Scalar::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// On/off reading of the scalar at `path`; `false` when absent.
    pub fn flag(&self, path: &[&str]) -> bool {
        self.get(path)
            .and_then(ConfigNode::as_scalar)
            .map(Scalar::is_on)
            .unwrap_or(false)
    }

    /// Mapping entries in document order; empty for anything but a mapping.
    pub fn entries(&self) -> &[(String, ConfigNode)] {
        match self {
            ConfigNode::Map(entries) => entries,
            _ => &[],
        }
    }

    /// Mapping entries at `path`; empty when absent or not a mapping.
    pub fn entries_at(&self, path: &[&str]) -> &[(String, ConfigNode)] {
        self.node(path).entries()
    }

    /// Ordered keys at `path`.
    ///
    /// A sequence of scalars is treated as a key list so set-like values
    /// written as YAML lists read the same as their mapping form.
    pub fn keys_of(&self, path: &[&str]) -> Vec<String> {
        match self.node(path) {
            ConfigNode::Map(entries) => entries.iter().map(|(key, _)| key.clone()).collect(),
            ConfigNode::Seq(items) => items
                .iter()
                .filter_map(ConfigNode::as_scalar)
                .map(Scalar::to_string)
                .collect(),
            ConfigNode::Null | ConfigNode::Scalar(_) => Vec::new(),
        }
    }

    /// The first declared mapping entry.
    pub fn first_entry(&self) -> Option<(&str, &ConfigNode)> {
        self.entries()
            .first()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries in a mapping or items in a sequence.
    pub fn len(&self) -> usize {
        match self {
            ConfigNode::Map(entries) => entries.len(),
            ConfigNode::Seq(items) => items.len(),
            ConfigNode::Null | ConfigNode::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for ConfigNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigNode::Null => serializer.serialize_unit(),
            ConfigNode::Scalar(value) => value.serialize(serializer),
            ConfigNode::Seq(items) => items.serialize(serializer),
            ConfigNode::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigNode, Scalar};

    fn map(entries: Vec<(&str, ConfigNode)>) -> ConfigNode {
        ConfigNode::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    fn sample() -> ConfigNode {
        map(vec![
            (
                "system",
                map(vec![("hostname", ConfigNode::text_value("leaf01"))]),
            ),
            (
                "link",
                map(vec![("mtu", ConfigNode::Scalar(Scalar::Int(9216)))]),
            ),
            (
                "items",
                ConfigNode::Seq(vec![
                    ConfigNode::text_value("a"),
                    ConfigNode::text_value("b"),
                ]),
            ),
        ])
    }

    #[test]
    fn get_walks_nested_path() {
        let root = sample();
        assert_eq!(root.text(&["system", "hostname"]), "leaf01");
        assert_eq!(root.text(&["link", "mtu"]), "9216");
    }

    #[test]
    fn missing_or_scalar_segments_resolve_to_default() {
        let root = sample();
        let fallback = ConfigNode::text_value("fallback");
        assert_eq!(root.get(&["system", "domain"]), None);
        assert_eq!(root.get(&["system", "hostname", "deeper"]), None);
        assert_eq!(root.get_or(&["nope", "at", "all"], &fallback), &fallback);
        assert_eq!(root.text_or(&["system"], "x"), "x");
        assert!(ConfigNode::Null.node(&["a", "b"]).is_null());
    }

    #[test]
    fn sequences_are_indexed_by_position() {
        let root = sample();
        assert_eq!(root.text(&["items", "0"]), "a");
        assert_eq!(root.text(&["items", "1"]), "b");
        assert_eq!(root.get(&["items", "2"]), None);
        assert_eq!(root.get(&["items", "first"]), None);
    }

    #[test]
    fn keys_of_keeps_document_order() {
        let root = map(vec![
            ("swp2", ConfigNode::Null),
            ("swp1", ConfigNode::Null),
            ("bond0", ConfigNode::Null),
        ]);
        assert_eq!(root.keys_of(&[]), vec!["swp2", "swp1", "bond0"]);
        assert!(root.keys_of(&["swp1"]).is_empty());
        assert_eq!(sample().keys_of(&["items"]), vec!["a", "b"]);
    }

    #[test]
    fn flag_reads_switch_spellings() {
        let root = map(vec![
            ("a", ConfigNode::text_value("on")),
            ("b", ConfigNode::text_value("off")),
            ("c", ConfigNode::Scalar(Scalar::Bool(true))),
        ]);
        assert!(root.flag(&["a"]));
        assert!(!root.flag(&["b"]));
        assert!(root.flag(&["c"]));
        assert!(!root.flag(&["missing"]));
    }

    #[test]
    fn has_distinguishes_null_from_absent() {
        let root = map(vec![("bond", ConfigNode::Null)]);
        assert!(root.has(&["bond"]));
        assert!(!root.has(&["bridge"]));
    }
}
