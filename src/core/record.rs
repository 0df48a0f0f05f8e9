use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::Candidate;
use crate::error::Result;

/// Deserialize aliases from a list, a single string, or null
fn deserialize_alt_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AltNames {
        Many(Vec<String>),
        One(String),
        Null,
    }

    Ok(match AltNames::deserialize(deserializer)? {
        AltNames::Many(names) => names,
        AltNames::One(name) => vec![name],
        AltNames::Null => Vec::new(),
    })
}

/// Generic screening record as loaded from a candidate file.
///
/// Only `name` and `alt_names` take part in matching; every other field is
/// carried through untouched and reappears in the flattened output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Primary name
    pub name: String,

    /// Known aliases
    #[serde(default, deserialize_with = "deserialize_alt_names")]
    pub alt_names: Vec<String>,

    /// Remaining fields of the source record
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alt_names: Vec::new(),
            fields: Map::new(),
        }
    }

    pub fn with_alt_name(mut self, alt: impl Into<String>) -> Self {
        self.alt_names.push(alt.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Precompute the matching strings and wrap the record for the pool
    pub fn into_candidate(self) -> Candidate<Record> {
        let name = self.name.clone();
        let alts = self.alt_names.clone();
        Candidate::new(self, &name, alts)
    }

    /// Parse a JSON array of records
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }

    /// Read and parse a candidate file
    pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::list_from_json(&json)?)
    }
}
