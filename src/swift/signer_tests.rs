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

//! Tests for TempURL signing
//!
//! Fixed request times keep every expectation reproducible.

use super::error::ValidationErr;
use super::http::StorageUrl;
use super::signer::{
    DigestAlgorithm, SignatureRequest, TtlSeconds, create_temp_url, get_hmac_body,
    hmac_hash_hex, temp_url_signature,
};
use chrono::{TimeZone, Utc};

const KEY: &[u8] = b"qe-tempurl-key";
const OBJECT_PATH: &str = "/v1/ACCT/tempurl/object";

fn get_test_date() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

fn storage_url() -> StorageUrl {
    "https://storage.example.com/v1/ACCT".parse().unwrap()
}

fn is_lower_hex(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ===========================
// HMAC primitives
// ===========================

#[test]
fn test_hmac_sha1_known_vector() {
    assert_eq!(
        hmac_hash_hex(
            DigestAlgorithm::Sha1,
            b"key",
            b"The quick brown fox jumps over the lazy dog"
        ),
        "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
    );
}

#[test]
fn test_hmac_sha256_known_vector() {
    assert_eq!(
        hmac_hash_hex(
            DigestAlgorithm::Sha256,
            b"key",
            b"The quick brown fox jumps over the lazy dog"
        ),
        "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
    );
}

#[test]
fn test_hmac_body_layout() {
    assert_eq!(
        get_hmac_body("GET", 1700000000, OBJECT_PATH),
        "GET\n1700000000\n/v1/ACCT/tempurl/object"
    );
}

#[test]
fn test_signature_is_hmac_of_body() {
    let expected = hmac_hash_hex(
        DigestAlgorithm::Sha1,
        KEY,
        b"PUT\n1700000020\n/v1/ACCT/tempurl/object",
    );
    assert_eq!(
        temp_url_signature("PUT", 1700000020, OBJECT_PATH, KEY, DigestAlgorithm::Sha1),
        expected
    );
}

// ===========================
// Digest algorithm selection
// ===========================

#[test]
fn test_default_digest_is_sha1_with_40_hex_chars() {
    let signed = SignatureRequest::builder()
        .method("GET")
        .container("tempurl")
        .object("object")
        .ttl_seconds(20)
        .secret_key(KEY)
        .request_time(get_test_date())
        .build()
        .sign(&storage_url())
        .unwrap();

    assert_eq!(signed.signature.len(), 40);
    assert!(is_lower_hex(&signed.signature));
}

#[test]
fn test_sha256_digest_has_64_hex_chars() {
    let signed = SignatureRequest::builder()
        .method("GET")
        .container("tempurl")
        .object("object")
        .ttl_seconds(20)
        .secret_key(KEY)
        .digest_algorithm(DigestAlgorithm::Sha256)
        .request_time(get_test_date())
        .build()
        .sign(&storage_url())
        .unwrap();

    assert_eq!(signed.signature.len(), 64);
    assert!(is_lower_hex(&signed.signature));
}

#[test]
fn test_digest_from_str() {
    assert_eq!("sha1".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha1);
    assert_eq!("SHA256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
    assert_eq!("sha2".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
    assert!(matches!(
        "md5".parse::<DigestAlgorithm>(),
        Err(ValidationErr::UnsupportedDigest(ref name)) if name == "md5"
    ));
}

// ===========================
// SignatureRequest
// ===========================

#[test]
fn test_sign_end_to_end_fields() {
    let now = get_test_date();
    let signed = SignatureRequest::builder()
        .method("get")
        .container("tempurl")
        .object("object")
        .ttl_seconds(20)
        .secret_key(KEY)
        .request_time(now)
        .build()
        .sign(&storage_url())
        .unwrap();

    assert_eq!(signed.expires, now.timestamp() + 20);
    assert_eq!(
        signed.target_url,
        "https://storage.example.com/v1/ACCT/tempurl/object"
    );
    assert_eq!(
        signed.signature,
        temp_url_signature("GET", signed.expires, OBJECT_PATH, KEY, DigestAlgorithm::Sha1)
    );
}

#[test]
fn test_method_is_uppercased() {
    let req = SignatureRequest::builder()
        .method("delete")
        .container("c")
        .object("o")
        .ttl_seconds(1)
        .secret_key(KEY)
        .build();
    assert_eq!(req.method(), "DELETE");
}

#[test]
fn test_fractional_ttl_is_truncated() {
    let now = get_test_date();
    let signed = SignatureRequest::builder()
        .method("GET")
        .container("tempurl")
        .object("object")
        .ttl_seconds(20.9)
        .secret_key(KEY)
        .request_time(now)
        .build()
        .sign(&storage_url())
        .unwrap();
    assert_eq!(signed.expires, now.timestamp() + 20);
    assert_eq!(TtlSeconds::from(-0.5), TtlSeconds(0));
    assert_eq!(TtlSeconds::from(std::time::Duration::from_millis(1500)), TtlSeconds(1));
}

#[test]
fn test_overflowing_ttl_is_rejected() {
    for ttl in [
        TtlSeconds::from(std::time::Duration::MAX),
        TtlSeconds::from(1e300),
        TtlSeconds(i64::MAX),
    ] {
        let err = create_temp_url(
            "https://storage.example.com/v1/AUTH_a",
            "GET",
            "c",
            "o",
            ttl,
            KEY,
            DigestAlgorithm::Sha1,
        )
        .unwrap_err();
        assert!(
            matches!(err, ValidationErr::InvalidTtl { ttl_seconds } if ttl_seconds == i64::MAX),
            "{err:?}"
        );
    }
}

#[test]
fn test_host_is_not_signed() {
    let now = get_test_date();
    let sign_with = |url: &str| {
        SignatureRequest::builder()
            .method("GET")
            .container("tempurl")
            .object("object")
            .ttl_seconds(20)
            .secret_key(KEY)
            .request_time(now)
            .build()
            .sign(&url.parse::<StorageUrl>().unwrap())
            .unwrap()
    };

    let a = sign_with("https://a.example.com/v1/ACCT");
    let b = sign_with("http://b.example.com:8080/v1/ACCT");
    assert_eq!(a.signature, b.signature);
    assert_ne!(a.target_url, b.target_url);
}

#[test]
fn test_object_path_is_signed_verbatim() {
    let now = get_test_date();
    let signed = SignatureRequest::builder()
        .method("GET")
        .container("tempurl")
        .object("dir/file name.txt")
        .ttl_seconds(20)
        .secret_key(KEY)
        .request_time(now)
        .build()
        .sign(&storage_url())
        .unwrap();
    assert_eq!(
        signed.signature,
        temp_url_signature(
            "GET",
            signed.expires,
            "/v1/ACCT/tempurl/dir/file name.txt",
            KEY,
            DigestAlgorithm::Sha1
        )
    );
}

#[test]
fn test_invalid_method_is_rejected() {
    let err = SignatureRequest::builder()
        .method("GE T")
        .container("c")
        .object("o")
        .ttl_seconds(1)
        .secret_key(KEY)
        .build()
        .sign(&storage_url())
        .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidMethod(_)));
}

#[test]
fn test_debug_redacts_key() {
    let req = SignatureRequest::builder()
        .method("GET")
        .container("c")
        .object("o")
        .ttl_seconds(1)
        .secret_key(&b"very-secret"[..])
        .build();
    let printed = format!("{req:?}");
    assert!(!printed.contains("very-secret"));
    assert!(!printed.contains("118, 101, 114, 121"));
}

#[test]
fn test_primary_and_secondary_keys_coexist() {
    let now = get_test_date();
    let sign_with = |key: &[u8]| {
        SignatureRequest::builder()
            .method("GET")
            .container("tempurl")
            .object("object")
            .ttl_seconds(20)
            .secret_key(key)
            .request_time(now)
            .build()
            .sign(&storage_url())
            .unwrap()
    };
    let primary = sign_with(&b"key-1"[..]);
    let secondary = sign_with(&b"key-2"[..]);
    assert_eq!(primary.expires, secondary.expires);
    assert_eq!(primary.target_url, secondary.target_url);
    assert_ne!(primary.signature, secondary.signature);
    assert_eq!(primary, sign_with(&b"key-1"[..]));
}

// ===========================
// create_temp_url
// ===========================

#[test]
fn test_create_temp_url_requires_account_delimiter() {
    let err = create_temp_url(
        "https://storage.example.com/AUTH_1234",
        "GET",
        "c",
        "o",
        20,
        KEY,
        DigestAlgorithm::Sha1,
    )
    .unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidStorageUrl { .. }));
}

#[test]
fn test_create_temp_url_expires_in_future() {
    let before = Utc::now().timestamp();
    let signed = create_temp_url(
        "https://storage.example.com/v1/AUTH_1234/",
        "GET",
        "c",
        "o",
        20,
        KEY,
        DigestAlgorithm::Sha256,
    )
    .unwrap();
    let after = Utc::now().timestamp();
    assert!(signed.expires >= before + 20 && signed.expires <= after + 20);
    assert_eq!(
        signed.target_url,
        "https://storage.example.com/v1/AUTH_1234/c/o"
    );
}

// ===========================
// SignedUrl helpers
// ===========================

#[test]
fn test_signed_url_to_url() {
    let signed = SignatureRequest::builder()
        .method("GET")
        .container("tempurl")
        .object("object")
        .ttl_seconds(20)
        .secret_key(KEY)
        .request_time(get_test_date())
        .build()
        .sign(&storage_url())
        .unwrap();

    let url = signed.to_url(None, false);
    assert!(url.starts_with("https://storage.example.com/v1/ACCT/tempurl/object?"));
    assert!(url.contains(&format!("temp_url_sig={}", signed.signature)));
    assert!(url.contains(&format!("temp_url_expires={}", signed.expires)));
    assert!(!url.contains("inline"));

    let url = signed.to_url(Some("my file.txt"), true);
    assert!(url.contains("filename=my%20file.txt"));
    assert!(url.ends_with("&inline"));

    let query = signed.query_params();
    assert_eq!(query.get("temp_url_sig"), Some(&signed.signature));
    assert_eq!(query.get("temp_url_expires"), Some(&signed.expires.to_string()));
}

// ===========================
// Properties
// ===========================

quickcheck! {
    fn prop_signature_is_deterministic(
        method: String,
        expires: i64,
        path: String,
        key: Vec<u8>,
        algorithm: DigestAlgorithm
    ) -> bool {
        temp_url_signature(&method, expires, &path, &key, algorithm)
            == temp_url_signature(&method, expires, &path, &key, algorithm)
    }

    fn prop_signature_length_matches_algorithm(
        expires: i64,
        path: String,
        key: Vec<u8>,
        algorithm: DigestAlgorithm
    ) -> bool {
        temp_url_signature("GET", expires, &path, &key, algorithm).len() == algorithm.hex_len()
    }

    fn prop_path_change_changes_signature(path: String, key: Vec<u8>) -> bool {
        let flipped = format!("{path}x");
        temp_url_signature("GET", 1, &path, &key, DigestAlgorithm::Sha1)
            != temp_url_signature("GET", 1, &flipped, &key, DigestAlgorithm::Sha1)
    }

    fn prop_expires_change_changes_signature(expires: i32, key: Vec<u8>) -> bool {
        let expires = i64::from(expires);
        temp_url_signature("GET", expires, OBJECT_PATH, &key, DigestAlgorithm::Sha1)
            != temp_url_signature("GET", expires + 1, OBJECT_PATH, &key, DigestAlgorithm::Sha1)
    }

    fn prop_key_change_changes_signature(key: Vec<u8>) -> bool {
        let mut other = key.clone();
        other.push(0x2a);
        temp_url_signature("GET", 1, OBJECT_PATH, &key, DigestAlgorithm::Sha1)
            != temp_url_signature("GET", 1, OBJECT_PATH, &other, DigestAlgorithm::Sha1)
    }

    fn prop_method_change_changes_signature(expires: i64) -> bool {
        temp_url_signature("GET", expires, OBJECT_PATH, KEY, DigestAlgorithm::Sha1)
            != temp_url_signature("PUT", expires, OBJECT_PATH, KEY, DigestAlgorithm::Sha1)
    }

    fn prop_algorithm_change_changes_signature(expires: i64) -> bool {
        temp_url_signature("GET", expires, OBJECT_PATH, KEY, DigestAlgorithm::Sha1)
            != temp_url_signature("GET", expires, OBJECT_PATH, KEY, DigestAlgorithm::Sha256)
    }
}
