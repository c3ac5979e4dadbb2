//! Structured metadata values and pretty-printing
//!
//! This module provides:
//! - `MetadataValue`: recursive value type (string, array, or nested dictionary)
//! - `Metadata`: the key-value mapping attached to handlers and log calls
//! - `prettify`: the `key=value` rendering appended to log messages

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key-value metadata, iterated in ascending key order.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// Value type for structured metadata
///
/// Numbers and booleans are stored in their string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Array(Vec<MetadataValue>),
    Dictionary(Metadata),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{}", s),
            MetadataValue::Array(items) => {
                let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{:?}", rendered)
            }
            MetadataValue::Dictionary(entries) => {
                if entries.is_empty() {
                    return write!(f, "[:]");
                }
                write!(f, "[")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", key, value.to_string())?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Accepts JSON-style scalars as well as strings, arrays and objects
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    String(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Array(Vec<MetadataValue>),
    Dictionary(Metadata),
}

impl<'de> Deserialize<'de> for MetadataValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::String(s) => MetadataValue::String(s),
            RawValue::Bool(b) => b.into(),
            RawValue::Int(i) => i.into(),
            RawValue::UInt(u) => u.into(),
            RawValue::Float(fl) => fl.into(),
            RawValue::Array(items) => MetadataValue::Array(items),
            RawValue::Dictionary(entries) => MetadataValue::Dictionary(entries),
        })
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::String(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i32, i64, u32, u64, usize, f64, bool);

impl From<Vec<MetadataValue>> for MetadataValue {
    fn from(items: Vec<MetadataValue>) -> Self {
        MetadataValue::Array(items)
    }
}

impl From<Metadata> for MetadataValue {
    fn from(entries: Metadata) -> Self {
        MetadataValue::Dictionary(entries)
    }
}

/// Render metadata as space-separated `key=value` pairs
///
/// Returns `None` when there is nothing to render.
pub fn prettify(metadata: &Metadata) -> Option<String> {
    if metadata.is_empty() {
        return None;
    }

    Some(
        metadata
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Merge call-site entries over a base mapping without touching either input
pub fn merged(base: &Metadata, overrides: &Metadata) -> Metadata {
    let mut combined = base.clone();
    combined.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    combined
}
