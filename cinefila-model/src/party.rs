//! Fields the catalogue stores either as plain text or as a small record.
//!
//! Production companies, producer representatives, contacts and cast entries
//! arrive in both shapes depending on who edited the document. They are kept
//! as a tagged variant and rendered by one explicit rule instead of being
//! inspected ad hoc at display time.

use std::fmt;

/// Either a single string or an ordered set of labelled string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyInfo {
    Scalar(String),
    /// Labelled values in document order.
    Structured(Vec<(String, String)>),
}

impl PartyInfo {
    pub fn is_empty(&self) -> bool {
        match self {
            PartyInfo::Scalar(value) => value.trim().is_empty(),
            PartyInfo::Structured(fields) => {
                fields.iter().all(|(_, value)| value.trim().is_empty())
            }
        }
    }

    /// Value stored under `label`, compared case-insensitively.
    pub fn field(&self, label: &str) -> Option<&str> {
        match self {
            PartyInfo::Scalar(_) => None,
            PartyInfo::Structured(fields) => fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(label))
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Scalars render verbatim; records render their non-empty values joined
    /// by `", "`.
    pub fn render(&self) -> String {
        match self {
            PartyInfo::Scalar(value) => value.trim().to_string(),
            PartyInfo::Structured(fields) => fields
                .iter()
                .map(|(_, value)| value.trim())
                .filter(|value| !value.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl fmt::Display for PartyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for PartyInfo {
    fn from(value: &str) -> Self {
        PartyInfo::Scalar(value.to_string())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::PartyInfo;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    fn leaf_text(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            nested => Some(nested.to_string()),
        }
    }

    impl PartyInfo {
        pub fn from_json(value: Value) -> Self {
            match value {
                Value::Object(map) => PartyInfo::Structured(
                    map.into_iter()
                        .filter_map(|(key, value)| {
                            leaf_text(value).map(|text| (key, text))
                        })
                        .collect(),
                ),
                Value::Array(items) => PartyInfo::Scalar(
                    items
                        .into_iter()
                        .filter_map(|item| {
                            let rendered = PartyInfo::from_json(item).render();
                            (!rendered.is_empty()).then_some(rendered)
                        })
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
                other => PartyInfo::Scalar(leaf_text(other).unwrap_or_default()),
            }
        }
    }

    impl<'de> Deserialize<'de> for PartyInfo {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Value::deserialize(deserializer).map(PartyInfo::from_json)
        }
    }

    impl Serialize for PartyInfo {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            use serde::ser::SerializeMap;

            match self {
                PartyInfo::Scalar(value) => serializer.serialize_str(value),
                PartyInfo::Structured(fields) => {
                    let mut map = serializer.serialize_map(Some(fields.len()))?;
                    for (key, value) in fields {
                        map.serialize_entry(key, value)?;
                    }
                    map.end()
                }
            }
        }
    }
}
