//! Named-field records.
//!
//! [`Structure`] is a loosely typed record: fields are set and read by name
//! and stored as JSON values. Once the shape is known it can be turned into a
//! real struct with [`Structure::into_typed`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Index;

/// A record whose fields are accessed by name.
///
/// # Example
///
/// ```rust
/// use colour_utils::Structure;
///
/// let mut person = Structure::new();
/// person.set("last_name", "Doe")?;
/// person.set("first_name", "John")?;
///
/// assert_eq!(person["first_name"], "John");
/// assert_eq!(person.fields().collect::<Vec<_>>(), ["last_name", "first_name"]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Structure {
    fields: Map<String, Value>,
}

impl Structure {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from any serializable struct or map.
    ///
    /// Returns `None` when `value` does not serialize to an object.
    pub fn from_typed<T: Serialize>(value: &T) -> Option<Self> {
        match serde_json::to_value(value).ok()? {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Sets a field, replacing any previous value in place.
    ///
    /// Fails when `value` cannot be represented as JSON, leaving the record
    /// unchanged.
    pub fn set(&mut self, field: impl Into<String>, value: impl Serialize) -> serde_json::Result<()> {
        let value = serde_json::to_value(value)?;
        self.fields.insert(field.into(), value);
        Ok(())
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field deserialized as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, field: &str) -> Option<T> {
        self.fields
            .get(field)
            .and_then(|v| T::deserialize(v).ok())
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    /// Returns true if the record has `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the record into a typed struct.
    pub fn into_typed<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.fields))
    }

    /// Serializes the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.fields)
    }
}

impl Index<&str> for Structure {
    type Output = Value;

    /// Missing fields index as `null`.
    fn index(&self, field: &str) -> &Value {
        &self.fields[field]
    }
}
