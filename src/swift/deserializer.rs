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

//! Format-polymorphic decoding of listing bodies
//!
//! The server may answer a listing in plain text, JSON or XML. [`Format::from_content_type`]
//! picks a decoder from the response `Content-Type` and [`deserialize`] turns the body into
//! typed records. Decoding is all-or-nothing: one bad record fails the whole body.

use crate::swift::error::DeserializationError;
use crate::swift::types::{ListingEntry, ListingRecord};
use std::collections::HashMap;
use std::fmt;
use xmltree::{Element, XMLNode};

/// Encoding of a listing body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Json,
    Xml,
}

/// Content-type substrings checked in order; the first one contained wins.
///
/// `text` comes first, so `text/json` and `text/xml` are decoded as text.
pub const FORMAT_PRIORITY: [(&str, Format); 3] = [
    ("text", Format::Text),
    ("json", Format::Json),
    ("xml", Format::Xml),
];

impl Format {
    /// Selects the format of a body from its content type.
    ///
    /// Matching is plain, case-sensitive substring containment; `None` when no candidate
    /// is contained.
    pub fn from_content_type(content_type: &str) -> Option<Format> {
        FORMAT_PRIORITY
            .iter()
            .find(|(needle, _)| content_type.contains(needle))
            .map(|(_, format)| *format)
    }

    /// Value of the `format` query parameter requesting this encoding.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Format::Text => "plain",
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => f.write_str("text"),
            Format::Json => f.write_str("json"),
            Format::Xml => f.write_str("xml"),
        }
    }
}

/// Decoder of one listing format.
pub type Decoder<T> = fn(&[u8]) -> Result<Vec<T>, DeserializationError>;

/// Returns the decoder registered for `format`.
pub fn decoder<T: ListingEntry>(format: Format) -> Decoder<T> {
    match format {
        Format::Text => decode_text::<T>,
        Format::Json => decode_json::<T>,
        Format::Xml => decode_xml::<T>,
    }
}

/// One name per non-empty line.
fn decode_text<T: ListingEntry>(body: &[u8]) -> Result<Vec<T>, DeserializationError> {
    let text = std::str::from_utf8(body)?;
    Ok(text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(T::from_name)
        .collect())
}

/// A JSON array of objects; absent keys leave fields unset.
fn decode_json<T: ListingEntry>(body: &[u8]) -> Result<Vec<T>, DeserializationError> {
    match serde_json::from_slice::<serde_json::Value>(body)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value::<T>(item).map_err(DeserializationError::from))
            .collect(),
        other => Err(DeserializationError::NotAList(json_kind(&other).to_string())),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn child_elements(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(XMLNode::as_element)
}

/// Every child of the root is a record whose own children are `tag -> text` fields.
fn decode_xml<T: ListingEntry>(body: &[u8]) -> Result<Vec<T>, DeserializationError> {
    let root = Element::parse(body)?;
    child_elements(&root)
        .map(|record| {
            let fields: HashMap<String, String> = child_elements(record)
                .map(|f| {
                    let text = f.get_text().map(|t| t.into_owned()).unwrap_or_default();
                    (f.name.clone(), text)
                })
                .collect();
            T::from_fields(&fields)
        })
        .collect()
}

/// Decodes `body` as a list of `T` in the given format.
///
/// # Examples
///
/// ```
/// use snappy::swift::deserializer::{Format, deserialize};
/// use snappy::swift::types::StorageObject;
///
/// let body = br#"[{"name":"a_obj","bytes":10,"hash":"abc","last_modified":"t","content_type":"text/plain"}]"#;
/// let objects: Vec<StorageObject> = deserialize(Format::Json, body).unwrap();
/// assert_eq!(objects[0].name, "a_obj");
/// assert_eq!(objects[0].byte_count, Some(10));
/// ```
pub fn deserialize<T: ListingEntry>(
    format: Format,
    body: &[u8],
) -> Result<Vec<T>, DeserializationError> {
    decoder::<T>(format)(body)
}

/// Decodes `body` like [`deserialize`] and wraps every record in a [`ListingRecord`].
pub fn deserialize_records<T: ListingEntry>(
    format: Format,
    body: &[u8],
) -> Result<Vec<ListingRecord>, DeserializationError> {
    Ok(deserialize::<T>(format, body)?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Decodes a listing response body, degrading every failure to `None`.
///
/// `None` is returned when the content type is missing or matches no format, when the
/// body is empty, and when the selected decoder fails. Decoder failures are logged.
pub fn deserialize_listing<T: ListingEntry>(
    content_type: Option<&str>,
    body: &[u8],
) -> Option<Vec<T>> {
    let content_type = content_type?;
    let format = Format::from_content_type(content_type)?;
    if body.is_empty() {
        return None;
    }
    match deserialize::<T>(format, body) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::warn!("unable to decode {format} listing (content-type '{content_type}'): {e}");
            log::debug!("undecodable listing body: {}", String::from_utf8_lossy(body));
            None
        }
    }
}
