//! Whitelist projection of the options document into child environment.
//!
//! Only [`OptionKey::ALL`] are considered. Strings are taken verbatim,
//! numbers and booleans as their JSON text, `null` and `""` count as
//! absent. Arrays and objects cannot be expressed as a single variable and
//! are reported back as rejected.

use serde_json::Value;

use super::{OptionKey, OptionsDocument};

/// Environment variables destined for the launched program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedEnv {
    vars: Vec<(OptionKey, String)>,
}

impl ExportedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable. Empty values are dropped so no empty variable is ever set.
    pub fn insert(&mut self, key: OptionKey, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((key, value)),
        }
        true
    }

    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.vars.iter().map(|(k, _)| *k)
    }

    /// `(name, value)` pairs ready for `Command::envs`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Result of projecting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub env: ExportedEnv,
    /// Whitelisted keys whose value had an unusable JSON type.
    pub rejected: Vec<OptionKey>,
}

enum Extracted {
    Value(String),
    Absent,
    Unsupported,
}

fn extract(value: Option<&Value>) -> Extracted {
    match value {
        None | Some(Value::Null) => Extracted::Absent,
        Some(Value::String(s)) if s.is_empty() => Extracted::Absent,
        Some(Value::String(s)) => Extracted::Value(s.clone()),
        Some(Value::Number(n)) => Extracted::Value(n.to_string()),
        Some(Value::Bool(b)) => Extracted::Value(b.to_string()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => Extracted::Unsupported,
    }
}

/// Project the whitelisted keys of `document` into an [`ExportedEnv`].
pub fn project(document: &OptionsDocument) -> Projection {
    let mut projection = Projection::default();

    for key in OptionKey::ALL {
        match extract(document.get(key.as_str())) {
            Extracted::Value(value) => {
                projection.env.insert(key, value);
            }
            Extracted::Absent => {}
            Extracted::Unsupported => projection.rejected.push(key),
        }
    }

    projection
}
