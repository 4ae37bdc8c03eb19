//! Schema nodes and document context
//!
//! A [`SchemaNode`] is a borrowed, read-only view over a parsed JSON value.
//! Nodes are shared by every rule during one generation run and are never
//! mutated.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON Schema `type` keyword values that rules are keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
    /// No `type` keyword, or `"any"`
    Any,
}

impl SchemaType {
    /// Parse a `type` keyword value
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "null" => Some(Self::Null),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view over a schema fragment
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

impl<'a> SchemaNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The underlying JSON value
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Child node under `keyword`, if present
    pub fn get(&self, keyword: &str) -> Option<SchemaNode<'a>> {
        self.value.get(keyword).map(SchemaNode::new)
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// Text of a string node
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// Declared type name.
    ///
    /// For array-valued `type` the first non-`"null"` entry wins. A node
    /// without a usable `type` is `"any"`.
    pub fn type_name(&self) -> &'a str {
        match self.value.get("type") {
            Some(Value::String(name)) => name.as_str(),
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .find(|name| *name != "null")
                .unwrap_or("any"),
            _ => "any",
        }
    }

    /// The `items` sub-node
    pub fn items(&self) -> Option<SchemaNode<'a>> {
        self.get("items")
    }

    /// `uniqueItems`, false unless present and `true`
    pub fn unique_items(&self) -> bool {
        self.value
            .get("uniqueItems")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn title(&self) -> Option<&'a str> {
        self.value.get("title").and_then(Value::as_str)
    }

    /// Numeric keyword such as `minimum`
    pub fn number(&self, keyword: &str) -> Option<f64> {
        self.value.get(keyword).and_then(Value::as_f64)
    }

    /// Entries of `properties` in document order
    pub fn properties(&self) -> Vec<(&'a str, SchemaNode<'a>)> {
        match self.value.get("properties") {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(name, node)| (name.as_str(), SchemaNode::new(node)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `name` is listed in this node's `required` array
    pub fn requires(&self, name: &str) -> bool {
        self.value
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().any(|n| n.as_str() == Some(name)))
            .unwrap_or(false)
    }
}

/// Identifies the schema document a node came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaContext {
    locator: String,
}

impl SchemaContext {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    /// URI or path of the document
    pub fn locator(&self) -> &str {
        &self.locator
    }
}

impl fmt::Display for SchemaContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator)
    }
}
