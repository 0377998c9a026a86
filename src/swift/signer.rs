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

//! TempURL signing
//!
//! A TempURL grants one HTTP method on one object until an expiry time. The signature is
//! the hex encoded HMAC of
//!
//! ```text
//! METHOD\nEXPIRES\n/v1/<account>/<container>/<object>
//! ```
//!
//! keyed with a `Temp-URL-Key` configured on the account or container. Only the resource
//! path is signed; scheme and host never are.

use crate::swift::error::ValidationErr;
use crate::swift::header_constants::{FILENAME, INLINE, TEMP_URL_EXPIRES, TEMP_URL_SIG};
use crate::swift::http::StorageUrl;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::{UtcTime, utc_now};
use hex::encode as hexencode;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Keyed hash function used for the TempURL signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    /// Length of the hex encoded signature produced by this algorithm.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha256 => 64,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = ValidationErr;

    /// Accepts `sha1`, and `sha2` or `sha256` for SHA-256, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha2" | "sha256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(ValidationErr::UnsupportedDigest(s.to_string())),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for DigestAlgorithm {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if bool::arbitrary(g) {
            DigestAlgorithm::Sha1
        } else {
            DigestAlgorithm::Sha256
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Sha1 => f.write_str("sha1"),
            DigestAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

/// Lifetime of a TempURL in whole seconds.
///
/// Fractional inputs are truncated toward zero, never rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TtlSeconds(pub i64);

impl From<i64> for TtlSeconds {
    fn from(v: i64) -> Self {
        TtlSeconds(v)
    }
}

impl From<i32> for TtlSeconds {
    fn from(v: i32) -> Self {
        TtlSeconds(v.into())
    }
}

impl From<u32> for TtlSeconds {
    fn from(v: u32) -> Self {
        TtlSeconds(v.into())
    }
}

impl From<f64> for TtlSeconds {
    fn from(v: f64) -> Self {
        TtlSeconds(v.trunc() as i64)
    }
}

impl From<Duration> for TtlSeconds {
    fn from(v: Duration) -> Self {
        TtlSeconds(i64::try_from(v.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Returns hex encoded HMAC of `data` keyed with `key`.
pub fn hmac_hash_hex(algorithm: DigestAlgorithm, key: &[u8], data: &[u8]) -> String {
    match algorithm {
        DigestAlgorithm::Sha1 => {
            let mut mac =
                Hmac::<Sha1>::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(data);
            hexencode(mac.finalize().into_bytes())
        }
        DigestAlgorithm::Sha256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(data);
            hexencode(mac.finalize().into_bytes())
        }
    }
}

/// Returns the string-to-sign `METHOD\nEXPIRES\nOBJECT_PATH`.
pub fn get_hmac_body(method: &str, expires: i64, object_path: &str) -> String {
    format!("{method}\n{expires}\n{object_path}")
}

/// Returns the TempURL signature for the given inputs.
///
/// This is a pure function: the same inputs always give the same signature.
pub fn temp_url_signature(
    method: &str,
    expires: i64,
    object_path: &str,
    key: &[u8],
    algorithm: DigestAlgorithm,
) -> String {
    let hmac_body = get_hmac_body(method, expires, object_path);
    hmac_hash_hex(algorithm, key, hmac_body.as_bytes())
}

/// Inputs of a TempURL signature.
///
/// The key is borrowed for the duration of the signing call and is never copied or
/// printed.
#[derive(Clone, TypedBuilder)]
pub struct SignatureRequest<'a> {
    /// HTTP verb the TempURL grants; normalized to upper case.
    #[builder(setter(transform = |method: &str| method.to_uppercase()))]
    method: String,
    #[builder(setter(into))]
    container: String,
    #[builder(setter(into))]
    object: String,
    #[builder(setter(into))]
    ttl_seconds: TtlSeconds,
    secret_key: &'a [u8],
    #[builder(default)]
    digest_algorithm: DigestAlgorithm,
    /// Clock used to compute `expires`; defaults to now.
    #[builder(default, setter(strip_option))]
    request_time: Option<UtcTime>,
}

impl fmt::Debug for SignatureRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureRequest")
            .field("method", &self.method)
            .field("container", &self.container)
            .field("object", &self.object)
            .field("ttl_seconds", &self.ttl_seconds)
            .field("secret_key", &"*****")
            .field("digest_algorithm", &self.digest_algorithm)
            .field("request_time", &self.request_time)
            .finish()
    }
}

impl SignatureRequest<'_> {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        self.digest_algorithm
    }

    /// Signs the request against `storage_url`.
    ///
    /// `expires` is the request time in whole seconds plus the TTL. A TTL whose sum
    /// overflows fails with [`ValidationErr::InvalidTtl`].
    pub fn sign(&self, storage_url: &StorageUrl) -> Result<SignedUrl, ValidationErr> {
        http::Method::from_bytes(self.method.as_bytes())
            .map_err(|_| ValidationErr::InvalidMethod(self.method.clone()))?;

        let now = self.request_time.unwrap_or_else(utc_now);
        let expires = now
            .timestamp()
            .checked_add(self.ttl_seconds.0)
            .ok_or(ValidationErr::InvalidTtl {
                ttl_seconds: self.ttl_seconds.0,
            })?;
        let object_path = storage_url.object_path(&self.container, &self.object);
        let signature = temp_url_signature(
            &self.method,
            expires,
            &object_path,
            self.secret_key,
            self.digest_algorithm,
        );

        log::debug!(
            "signed TempURL: method={} path={} expires={} digest={}",
            self.method,
            object_path,
            expires,
            self.digest_algorithm
        );

        Ok(SignedUrl {
            target_url: storage_url.target_url(&self.container, &self.object),
            signature,
            expires,
        })
    }
}

/// Result of signing: the unsigned object URL, the hex signature and the expiry.
///
/// Callers append `temp_url_sig` and `temp_url_expires` to `target_url`, either by hand
/// or with [`SignedUrl::query_params`] / [`SignedUrl::to_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedUrl {
    pub target_url: String,
    pub signature: String,
    pub expires: i64,
}

impl SignedUrl {
    /// Returns the `temp_url_sig` and `temp_url_expires` query parameters.
    pub fn query_params(&self) -> Multimap {
        let mut query = Multimap::new();
        query.add(TEMP_URL_SIG, &self.signature);
        query.add(TEMP_URL_EXPIRES, self.expires.to_string());
        query
    }

    /// Returns the complete TempURL, optionally with a `filename` override and the
    /// `inline` flag.
    pub fn to_url(&self, filename: Option<&str>, inline: bool) -> String {
        let mut query = self.query_params();
        query.add_opt(FILENAME, filename);
        let mut url = format!("{}?{}", self.target_url, query.to_query_string());
        if inline {
            url.push('&');
            url.push_str(INLINE);
        }
        url
    }
}

/// Returns a TempURL for `method` on `container/object`, valid for `ttl_seconds` from now.
///
/// The account is taken from `storage_url`, which must contain `/v1/<account>`.
pub fn create_temp_url(
    storage_url: &str,
    method: &str,
    container: &str,
    object: &str,
    ttl_seconds: impl Into<TtlSeconds>,
    secret_key: &[u8],
    digest_algorithm: DigestAlgorithm,
) -> Result<SignedUrl, ValidationErr> {
    let storage_url: StorageUrl = storage_url.parse()?;
    SignatureRequest::builder()
        .method(method)
        .container(container)
        .object(object)
        .ttl_seconds(ttl_seconds)
        .secret_key(secret_key)
        .digest_algorithm(digest_algorithm)
        .build()
        .sign(&storage_url)
}
