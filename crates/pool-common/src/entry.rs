//! Pool entry schema.
//!
//! Each line of the pool file is one JSON object written by some instance.
//! Writers are loosely coordinated, so every field is optional and unknown
//! fields are ignored. Consumers apply their own defaults through the
//! accessor methods.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::paths::UNKNOWN_INSTANCE;

/// What an instance reported doing.
///
/// The set is open: names outside the known five are kept verbatim in
/// [`Action::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// Work on the topic finished.
    Completed,
    /// The instance cannot proceed.
    Blocked,
    /// General broadcast to other instances.
    Signaling,
    /// The instance took ownership of the topic.
    Claimed,
    /// Liveness report.
    Health,
    /// Any other action name.
    Other(String),
}

impl Action {
    pub fn as_str(&self) -> &str {
        match self {
            Action::Completed => "completed",
            Action::Blocked => "blocked",
            Action::Signaling => "signaling",
            Action::Claimed => "claimed",
            Action::Health => "health",
            Action::Other(name) => name,
        }
    }
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        match name.as_str() {
            "completed" => Action::Completed,
            "blocked" => Action::Blocked,
            "signaling" => Action::Signaling,
            "claimed" => Action::Claimed,
            "health" => Action::Health,
            _ => Action::Other(name),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single activity record from the pool file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Epoch seconds when the entry was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,

    /// Identifier of the instance that wrote the entry, kept as written.
    ///
    /// `Some(Value::Null)` records an explicit `null`, which is not the same
    /// as an absent field.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_instance: Option<Value>,

    #[serde(
        default,
        deserialize_with = "lenient_action",
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<Action>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub topic: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,

    /// Files or areas touched by the work.
    #[serde(
        default,
        deserialize_with = "truthy_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub affects: Option<String>,

    /// What this entry unblocks, if anything.
    #[serde(
        default,
        deserialize_with = "truthy_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub blocks: Option<String>,

    /// Per-instance relevance scores. Values are only interpreted for the
    /// instance being asked about, so odd scores elsewhere are harmless.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub relevance: HashMap<String, Value>,
}

/// Render a scalar the way the pool's Python writers print values.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| display_value(&value)))
}

fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!is_falsy(&value)).then(|| display_value(&value)))
}

fn lenient_action<'de, D>(deserializer: D) -> Result<Option<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.map(Action::from))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl PoolEntry {
    /// Decode one pool line.
    ///
    /// Only JSON objects are accepted; arrays and scalars are rejected even
    /// when they would map onto the struct positionally.
    pub fn from_json_line(line: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(line)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "pool entry must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Timestamp in epoch seconds, `0` when absent.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp.unwrap_or(0.0)
    }

    /// Source instance for display, `"?"` when absent.
    pub fn source(&self) -> Cow<'_, str> {
        match &self.source_instance {
            None => Cow::Borrowed(UNKNOWN_INSTANCE),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(display_value(other)),
        }
    }

    /// Whether the entry belongs to `instance` for selection and display.
    ///
    /// An absent source counts as `"?"`; an explicit `null` or a non-string
    /// source never matches.
    pub fn is_from(&self, instance: &str) -> bool {
        match &self.source_instance {
            None => instance == UNKNOWN_INSTANCE,
            Some(Value::String(s)) => s == instance,
            Some(_) => false,
        }
    }

    /// Whether the entry names `instance` as its writer.
    ///
    /// Stricter than [`PoolEntry::is_from`]: an absent source never matches.
    pub fn is_written_by(&self, instance: &str) -> bool {
        matches!(&self.source_instance, Some(Value::String(s)) if s == instance)
    }

    /// Relevance score for `instance`, `0` when unscored or not numeric.
    pub fn relevance_for(&self, instance: &str) -> f64 {
        match self.relevance.get(instance) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::Bool(true)) => 1.0,
            _ => 0.0,
        }
    }

    /// Whether the entry carries a non-empty `blocks` marker.
    pub fn blocks_something(&self) -> bool {
        self.blocks.as_deref().is_some_and(|b| !b.is_empty())
    }

    /// Whether the entry reports the given action.
    pub fn has_action(&self, action: &Action) -> bool {
        self.action.as_ref() == Some(action)
    }
}
