// Snappy Rust Library for OpenStack Swift Compatible Object Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Records produced by account and container listings

use crate::swift::error::DeserializationError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Field names shared by the JSON keys and the XML tags of a listing.
pub(crate) mod field {
    pub const NAME: &str = "name";
    pub const SUBDIR: &str = "subdir";
    pub const COUNT: &str = "count";
    pub const BYTES: &str = "bytes";
    pub const HASH: &str = "hash";
    pub const LAST_MODIFIED: &str = "last_modified";
    pub const CONTENT_TYPE: &str = "content_type";
}

/// A record type that can be decoded from any listing format.
///
/// JSON records go through `serde`; XML records arrive as a flat map of child tag to
/// text; text records only carry a name.
pub trait ListingEntry: DeserializeOwned + Into<ListingRecord> + Sized {
    /// Builds a name-only record from one line of a text listing.
    fn from_name(name: &str) -> Self;

    /// Builds a record from the `tag -> text` children of one XML element.
    fn from_fields(fields: &HashMap<String, String>) -> Result<Self, DeserializationError>;
}

fn parse_count(
    fields: &HashMap<String, String>,
    key: &str,
) -> Result<Option<u64>, DeserializationError> {
    match fields.get(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DeserializationError::InvalidField {
                field: key.to_string(),
                value: v.clone(),
            }),
    }
}

/// Reads an explicit JSON `null` name as an empty one, like a missing key.
fn deserialize_null_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(name.unwrap_or_default())
}

fn name_of(fields: &HashMap<String, String>) -> String {
    fields
        .get(field::NAME)
        .or_else(|| fields.get(field::SUBDIR))
        .cloned()
        .unwrap_or_default()
}

/// One container of an account listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Container {
    #[serde(default, alias = "subdir", deserialize_with = "deserialize_null_name")]
    pub name: String,
    #[serde(default, rename = "count")]
    pub object_count: Option<u64>,
    #[serde(default, rename = "bytes")]
    pub byte_count: Option<u64>,
}

impl ListingEntry for Container {
    fn from_name(name: &str) -> Self {
        Container {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn from_fields(fields: &HashMap<String, String>) -> Result<Self, DeserializationError> {
        Ok(Container {
            name: name_of(fields),
            object_count: parse_count(fields, field::COUNT)?,
            byte_count: parse_count(fields, field::BYTES)?,
        })
    }
}

/// One object of a container listing.
///
/// With a `delimiter`, pseudo-directories are returned as `subdir` entries; their name
/// ends up in `name` and every other field stays unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StorageObject {
    #[serde(default, alias = "subdir", deserialize_with = "deserialize_null_name")]
    pub name: String,
    #[serde(default, rename = "bytes")]
    pub byte_count: Option<u64>,
    #[serde(default, rename = "hash")]
    pub content_hash: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl ListingEntry for StorageObject {
    fn from_name(name: &str) -> Self {
        StorageObject {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn from_fields(fields: &HashMap<String, String>) -> Result<Self, DeserializationError> {
        Ok(StorageObject {
            name: name_of(fields),
            byte_count: parse_count(fields, field::BYTES)?,
            content_hash: fields.get(field::HASH).cloned(),
            last_modified: fields.get(field::LAST_MODIFIED).cloned(),
            content_type: fields.get(field::CONTENT_TYPE).cloned(),
        })
    }
}

/// A listing record of either kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingRecord {
    Container(Container),
    Object(StorageObject),
}

impl ListingRecord {
    pub fn name(&self) -> &str {
        match self {
            ListingRecord::Container(c) => &c.name,
            ListingRecord::Object(o) => &o.name,
        }
    }
}

impl From<Container> for ListingRecord {
    fn from(c: Container) -> Self {
        ListingRecord::Container(c)
    }
}

impl From<StorageObject> for ListingRecord {
    fn from(o: StorageObject) -> Self {
        ListingRecord::Object(o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_container_from_fields() {
        let c = Container::from_fields(&fields(&[("name", "c1"), ("count", "3"), ("bytes", "12")]))
            .unwrap();
        assert_eq!(c.name, "c1");
        assert_eq!(c.object_count, Some(3));
        assert_eq!(c.byte_count, Some(12));
    }

    #[test]
    fn test_object_from_fields_missing_keys_are_unset() {
        let o = StorageObject::from_fields(&fields(&[("name", "o1")])).unwrap();
        assert_eq!(o, StorageObject::from_name("o1"));
    }

    #[test]
    fn test_non_numeric_bytes_is_error() {
        let err = StorageObject::from_fields(&fields(&[("name", "o1"), ("bytes", "ten")]))
            .unwrap_err();
        assert!(matches!(
            err,
            DeserializationError::InvalidField { ref field, .. } if field == "bytes"
        ));
    }

    #[test]
    fn test_null_json_fields_are_unset() {
        let o: StorageObject =
            serde_json::from_str(r#"{"name": null, "bytes": 1, "hash": null}"#).unwrap();
        assert_eq!(o.name, "");
        assert_eq!(o.byte_count, Some(1));
        assert_eq!(o.content_hash, None);

        let c: Container = serde_json::from_str(r#"{"name": null, "count": null}"#).unwrap();
        assert_eq!(c, Container::default());
    }

    #[test]
    fn test_subdir_becomes_name() {
        let o: StorageObject = serde_json::from_str(r#"{"subdir": "photos/"}"#).unwrap();
        assert_eq!(o.name, "photos/");
        assert_eq!(ListingRecord::from(o).name(), "photos/");
    }
}
