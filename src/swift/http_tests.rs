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

use super::error::ValidationErr;
use super::http::{StorageUrl, Url};
use super::multimap_ext::{Multimap, MultimapExt};

// ===========================
// Url Tests
// ===========================

#[test]
fn test_url_default() {
    let url = Url::default();
    assert!(url.https);
    assert!(url.host.is_empty());
    assert_eq!(url.port, 0);
    assert!(url.path.is_empty());
    assert!(url.query.is_empty());
}

#[test]
fn test_url_host_header_value_with_port() {
    let url = Url {
        https: true,
        host: "swift.example.com".to_string(),
        port: 8080,
        path: "/".to_string(),
        query: Multimap::default(),
    };
    assert_eq!(url.host_header_value(), "swift.example.com:8080");
}

#[test]
fn test_url_display_with_query() {
    let mut query = Multimap::new();
    query.add("format", "json");
    let url = Url {
        https: false,
        host: "localhost".to_string(),
        port: 8080,
        path: "/v1/AUTH_test/c1".to_string(),
        query,
    };
    assert_eq!(
        url.to_string(),
        "http://localhost:8080/v1/AUTH_test/c1?format=json"
    );
}

// ===========================
// StorageUrl Tests
// ===========================

#[test]
fn test_storage_url_parts() {
    let storage_url: StorageUrl = "https://storage.example.com/v1/AUTH_1234/".parse().unwrap();
    assert_eq!(storage_url.account(), "AUTH_1234");
    assert_eq!(storage_url.as_str(), "https://storage.example.com/v1/AUTH_1234");
    assert_eq!(storage_url.swift_endpoint(), "https://storage.example.com");
    assert!(storage_url.is_secure());
}

#[test]
fn test_storage_url_account_stops_at_slash() {
    let storage_url: StorageUrl = "http://127.0.0.1:8080/v1/AUTH_a/extra".parse().unwrap();
    assert_eq!(storage_url.account(), "AUTH_a");
    assert!(!storage_url.is_secure());
}

#[test]
fn test_storage_url_with_prefix_path() {
    let storage_url: StorageUrl = "https://proxy.example.com/swift/v1/AUTH_x".parse().unwrap();
    assert_eq!(storage_url.swift_endpoint(), "https://proxy.example.com/swift");
    let url = storage_url.info_url(&Multimap::new());
    assert_eq!(url.to_string(), "https://proxy.example.com/swift/info");
}

#[test]
fn test_storage_url_missing_delimiter() {
    let err = "https://storage.example.com/AUTH_1234"
        .parse::<StorageUrl>()
        .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidStorageUrl { .. }));
}

#[test]
fn test_storage_url_empty_account() {
    assert!("https://storage.example.com/v1/".parse::<StorageUrl>().is_err());
}

#[test]
fn test_storage_url_rejects_bad_scheme_and_query() {
    assert!("ftp://storage.example.com/v1/AUTH_a".parse::<StorageUrl>().is_err());
    assert!(
        "https://storage.example.com/v1/AUTH_a?x=1"
            .parse::<StorageUrl>()
            .is_err()
    );
}

#[test]
fn test_object_path_and_target_url() {
    let storage_url: StorageUrl = "https://storage.example.com/v1/ACCT".parse().unwrap();
    assert_eq!(
        storage_url.object_path("tempurl", "object"),
        "/v1/ACCT/tempurl/object"
    );
    assert_eq!(
        storage_url.target_url("tempurl", "object"),
        "https://storage.example.com/v1/ACCT/tempurl/object"
    );
}

#[test]
fn test_build_url_encodes_names() {
    let storage_url: StorageUrl = "https://storage.example.com:8443/v1/ACCT".parse().unwrap();
    let url = storage_url
        .build_url(&Multimap::new(), Some("my container"), Some("dir/a b"))
        .unwrap();
    assert_eq!(url.port, 8443);
    assert_eq!(url.path, "/v1/ACCT/my%20container/dir/a%20b");
}

#[test]
fn test_build_url_account_level() {
    let storage_url: StorageUrl = "https://storage.example.com/v1/ACCT".parse().unwrap();
    let url = storage_url.build_url(&Multimap::new(), None, None).unwrap();
    assert_eq!(url.to_string(), "https://storage.example.com/v1/ACCT");
}

#[test]
fn test_build_url_object_requires_container() {
    let storage_url: StorageUrl = "https://storage.example.com/v1/ACCT".parse().unwrap();
    let err = storage_url
        .build_url(&Multimap::new(), None, Some("o"))
        .unwrap_err();
    assert!(matches!(err, ValidationErr::UrlBuildError(_)));
}

#[test]
fn test_info_and_health_check_urls() {
    let storage_url: StorageUrl = "http://localhost:8080/v1/AUTH_test".parse().unwrap();
    assert_eq!(
        storage_url.info_url(&Multimap::new()).to_string(),
        "http://localhost:8080/info"
    );
    assert_eq!(
        storage_url.health_check_url(&Multimap::new()).to_string(),
        "http://localhost:8080/healthcheck"
    );
}
