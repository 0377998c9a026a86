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

//! Various utility and helper functions

use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::HashMap;

/// Longest container name accepted by a default Swift cluster, in bytes.
pub const MAX_CONTAINER_NAME_LENGTH: usize = 256;

/// Longest object name accepted by a default Swift cluster, in bytes.
pub const MAX_OBJECT_NAME_LENGTH: usize = 1024;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Encodes a query string key or value
pub fn url_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

const OBJECT_KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encodes a container or object name for use in a request path; `/` is kept.
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Validates given container name.
pub fn check_container_name(container_name: &str) -> Result<(), ValidationErr> {
    let invalid = |reason: &str| ValidationErr::InvalidContainerName {
        name: container_name.to_string(),
        reason: reason.to_string(),
    };

    if container_name.is_empty() {
        return Err(invalid("container name cannot be empty"));
    }
    if container_name.len() > MAX_CONTAINER_NAME_LENGTH {
        return Err(invalid("container name cannot be longer than 256 bytes"));
    }
    if container_name.contains('/') {
        return Err(invalid("container name cannot contain '/'"));
    }
    Ok(())
}

/// Validates given object name.
pub fn check_object_name(object_name: &str) -> Result<(), ValidationErr> {
    let invalid = |reason: &str| ValidationErr::InvalidObjectName {
        name: object_name.to_string(),
        reason: reason.to_string(),
    };

    if object_name.is_empty() {
        return Err(invalid("object name cannot be empty"));
    }
    if object_name.len() > MAX_OBJECT_NAME_LENGTH {
        return Err(invalid("object name cannot be longer than 1024 bytes"));
    }
    Ok(())
}

/// Returns `metadata` as headers named `<prefix><key>`, e.g. `X-Container-Meta-Color`.
pub fn metadata_headers(prefix: &str, metadata: &HashMap<String, String>) -> Multimap {
    let mut headers = Multimap::new();
    for (key, value) in metadata {
        headers.add(format!("{prefix}{key}"), value);
    }
    headers
}

/// Returns hex encoded MD5 hash of given data
pub fn md5_hash(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Returns the filename a Swift proxy reports in `Content-Disposition` when serving
/// `object_name` as an attachment.
///
/// A name ending in `/` yields its last segment before the slash; any other name
/// containing `/` yields everything after the first `/`.
pub fn expected_download_filename(object_name: &str) -> &str {
    if let Some(stripped) = object_name.strip_suffix('/') {
        return stripped.rsplit('/').next().unwrap_or(stripped);
    }
    match object_name.split_once('/') {
        Some((_, suffix)) => suffix,
        None => object_name,
    }
}

/// Builds the `Content-Disposition` value returned for a TempURL download of `filename`.
pub fn attachment_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"; filename*=UTF-8''{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_download_filename_plain() {
        assert_eq!(expected_download_filename("object"), "object");
    }

    #[test]
    fn test_expected_download_filename_with_slash() {
        assert_eq!(expected_download_filename("object/foo"), "foo");
        assert_eq!(expected_download_filename("a/b/c"), "b/c");
    }

    #[test]
    fn test_expected_download_filename_trailing_slash() {
        assert_eq!(expected_download_filename("object/"), "object");
        assert_eq!(expected_download_filename("a/b/"), "b");
    }

    #[test]
    fn test_attachment_disposition() {
        assert_eq!(
            attachment_disposition("object"),
            "attachment; filename=\"object\"; filename*=UTF-8''object"
        );
    }

    #[test]
    fn test_urlencode_object_key_keeps_slash() {
        assert_eq!(urlencode_object_key("a b/c"), "a%20b/c");
        assert_eq!(urlencode_object_key("obj-1_2.3~"), "obj-1_2.3~");
    }

    #[test]
    fn test_check_container_name() {
        assert!(check_container_name("my-container").is_ok());
        assert!(check_container_name("").is_err());
        assert!(check_container_name("a/b").is_err());
        assert!(check_container_name(&"c".repeat(257)).is_err());
    }

    #[test]
    fn test_check_object_name() {
        assert!(check_object_name("dir/object").is_ok());
        assert!(check_object_name("").is_err());
        assert!(check_object_name(&"o".repeat(1025)).is_err());
    }

    #[test]
    fn test_metadata_headers() {
        let metadata = HashMap::from([("Color".to_string(), "blue".to_string())]);
        let headers = metadata_headers("X-Object-Meta-", &metadata);
        assert_eq!(
            headers.get("X-Object-Meta-Color").map(String::as_str),
            Some("blue")
        );
    }

    #[test]
    fn test_md5_hash() {
        assert_eq!(md5_hash(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
