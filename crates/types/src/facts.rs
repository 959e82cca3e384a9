//! Collected host facts

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Record key for the login name shown in the title
pub const USER_KEY: &str = "user";
/// Record key for the machine hostname shown in the title
pub const HOSTNAME_KEY: &str = "hostname";

/// Value of a single collected fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Single(String),
    /// Multi-valued facts such as one entry per GPU
    List(Vec<String>),
}

impl FactValue {
    /// True if there is nothing worth displaying
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Non-empty values in order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FactValue::Single(value) => {
                if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.as_str()]
                }
            }
            FactValue::List(values) => values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        FactValue::Single(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        FactValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for FactValue {
    fn from(values: Vec<String>) -> Self {
        FactValue::List(values)
    }
}

/// Facts gathered for one run, keyed by field name.
///
/// Absent and empty entries are treated identically: not collected, or
/// collection failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    values: HashMap<String, FactValue>,
}

impl FactRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under an arbitrary key. Empty values are dropped.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FactValue>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    /// Store a value for a displayable field
    pub fn set(&mut self, field: Field, value: impl Into<FactValue>) {
        self.insert(field.key(), value);
    }

    /// Builder-style `set`, handy when assembling records by hand
    pub fn with(mut self, field: Field, value: impl Into<FactValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FactValue> {
        self.values.get(key)
    }

    pub fn field(&self, field: Field) -> Option<&FactValue> {
        self.get(field.key())
    }

    /// First value stored under `key`, or "" when absent
    pub fn text(&self, key: &str) -> &str {
        self.get(key)
            .and_then(|value| value.values().into_iter().next())
            .unwrap_or("")
    }

    pub fn user(&self) -> &str {
        self.text(USER_KEY)
    }

    pub fn hostname(&self) -> &str {
        self.text(HOSTNAME_KEY)
    }

    /// Resolved terminal name, used to pick a graphics encoding
    pub fn terminal(&self) -> &str {
        self.text(Field::Terminal.key())
    }

    pub fn remove(&mut self, key: &str) -> Option<FactValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
