use std::fs;
use std::path::Path;

use serde_yaml::Value;
use thiserror::Error;

use crate::tree::{ConfigNode, Scalar};

/// Errors that can occur while loading a document into a [`ConfigNode`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input could not be deserialized as YAML.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to read input file.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// Document contained nothing.
    #[error("document is empty")]
    Empty,
    /// Document parsed but is not a tree.
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Parse YAML bytes into a [`ConfigNode`] tree.
pub fn parse(yaml: &[u8]) -> Result<ConfigNode, ParseError> {
    let value: Value = serde_yaml::from_slice(yaml)?;
    match convert(value) {
        ConfigNode::Null => Err(ParseError::Empty),
        ConfigNode::Scalar(_) => Err(ParseError::Malformed(
            "top level is a bare scalar, expected a mapping or sequence".to_string(),
        )),
        node => Ok(node),
    }
}

/// Parse a YAML file into a [`ConfigNode`] tree.
pub fn parse_file(path: &Path) -> Result<ConfigNode, ParseError> {
    let bytes = fs::read(path)?;
    parse(&bytes)
}

fn convert(value: Value) -> ConfigNode {
    match value {
        Value::Null => ConfigNode::Null,
        Value::Bool(value) => ConfigNode::Scalar(Scalar::Bool(value)),
        Value::Number(number) => ConfigNode::Scalar(number_scalar(&number)),
        Value::String(value) => ConfigNode::Scalar(Scalar::Str(value)),
        Value::Sequence(items) => ConfigNode::Seq(items.into_iter().map(convert).collect()),
        Value::Mapping(mapping) => ConfigNode::Map(
            mapping
                .into_iter()
                .map(|(key, value)| (key_text(key), convert(value)))
                .collect(),
        ),
        Value::Tagged(tagged) => convert(tagged.value),
    }
}

fn number_scalar(number: &serde_yaml::Number) -> Scalar {
    if let Some(value) = number.as_i64() {
        Scalar::Int(value)
    } else if number.is_f64() {
        number
            .as_f64()
            .map(Scalar::Float)
            .unwrap_or_else(|| Scalar::Str(number.to_string()))
    } else {
        // u64 beyond i64 range; keep the digits exactly.
        Scalar::Str(number.to_string())
    }
}

fn key_text(key: Value) -> String {
    match key {
        Value::String(value) => value,
        Value::Number(number) => number.to_string(),
        Value::Bool(value) => value.to_string(),
        Value::Null => "null".to_string(),
        Value::Tagged(tagged) => key_text(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|rendered| rendered.trim_end().to_string())
            .unwrap_or_default(),
    }
}
