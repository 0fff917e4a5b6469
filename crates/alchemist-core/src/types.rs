// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the plugin, its options, and its collaborators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AlchemistError;

/// Label mapping attached to a configuration node: label key to its values.
pub type Labels = BTreeMap<String, Vec<String>>;

/// Location reported for manifests that were supplied inline in the options.
pub const INLINE_MANIFEST_LOCATION: &str = "<inline>";

/// A value that may be written as a single string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Returns the values as a sequence, wrapping a bare string.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value.clone()],
            OneOrMany::Many(values) => values.clone(),
        }
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Plain nested values handed to the transmutation engine.
///
/// Built fresh for every invocation and never persisted by the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(Value);

impl Context {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// An empty object context.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Context {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Where the manifest comes from: a location the data adapter resolves, or
/// an object embedded directly in the plugin options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ManifestSource {
    Location(String),
    Inline(Map<String, Value>),
}

impl ManifestSource {
    /// Human-readable location, used in logs and errors.
    pub fn location(&self) -> &str {
        match self {
            ManifestSource::Location(location) => location,
            ManifestSource::Inline(_) => INLINE_MANIFEST_LOCATION,
        }
    }
}

/// A manifest document ready for the transmutation engine.
///
/// The plugin treats the document as opaque apart from requiring it to be an
/// object and carrying the `context` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LoadedManifest {
    document: Map<String, Value>,
}

impl LoadedManifest {
    /// Parses a manifest document. The document must be a JSON object.
    pub fn parse(value: Value) -> Result<Self, AlchemistError> {
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(AlchemistError::manifest_load(
                INLINE_MANIFEST_LOCATION,
                format!("manifest must be an object, found {}", value_kind(&other)),
            )),
        }
    }

    /// Builds a manifest from `document` with its `context` entry replaced.
    pub fn with_context(mut document: Map<String, Value>, context: &Context) -> Self {
        document.insert("context".to_string(), context.as_value().clone());
        Self { document }
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The `context` entry of the manifest, if present.
    pub fn context(&self) -> Option<&Value> {
        self.document.get("context")
    }

    pub fn into_document(self) -> Map<String, Value> {
        self.document
    }
}

/// Usage information a command reports to the host's help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandUsage {
    pub description: String,
    pub category: String,
}

/// A concrete, deserializable configuration tree.
///
/// Hosts that keep their project configuration as plain data can hand this
/// to the plugin directly. Labels accept either a single string or a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigTree {
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, OneOrMany>,
    #[serde(default)]
    pub values: Map<String, Value>,
    #[serde(default)]
    pub children: Vec<ConfigTree>,
}

impl ConfigTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.labels.insert(key.into(), OneOrMany::Many(values));
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: ConfigTree) -> Self {
        self.children.push(child);
        self
    }
}

/// Short name of a JSON value's type, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
