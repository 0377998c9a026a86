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

use crate::swift::header_constants::{CONTENT_TYPE, ETAG, X_TRANS_ID};
use crate::swift::types::SwiftRequest;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[macro_export]
/// Implements the `FromSwiftResponse` trait for the specified types.
macro_rules! impl_from_swift_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::swift::types::FromSwiftResponse for $ty {
                async fn from_swift_response(
                    request: $crate::swift::types::SwiftRequest,
                    response: Result<reqwest::Response, $crate::swift::error::Error>,
                ) -> Result<Self, $crate::swift::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        status: resp.status(),
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp
                            .bytes()
                            .await
                            .map_err($crate::swift::error::NetworkError::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasSwiftFields` trait for the specified types.
macro_rules! impl_has_swift_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::swift::response::a_response_traits::HasSwiftFields for $ty {
                fn request(&self) -> &$crate::swift::types::SwiftRequest {
                    &self.request
                }

                fn status(&self) -> http::StatusCode {
                    self.status
                }

                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

pub trait HasSwiftFields {
    /// The request that was sent to the storage service.
    fn request(&self) -> &SwiftRequest;
    /// HTTP status returned by the server. Any status is a successful response.
    fn status(&self) -> StatusCode;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body.
    fn body(&self) -> &Bytes;
}

/// Returns the container name the request addressed.
pub trait HasContainer: HasSwiftFields {
    #[inline]
    fn container(&self) -> &str {
        self.request().container.as_deref().unwrap_or_default()
    }
}

/// Returns the object name the request addressed.
pub trait HasObject: HasSwiftFields {
    #[inline]
    fn object(&self) -> &str {
        self.request().object.as_deref().unwrap_or_default()
    }
}

/// Value of the `X-Trans-Id` header, the server side id of the transaction.
pub trait HasTransId: HasSwiftFields {
    #[inline]
    fn trans_id(&self) -> Option<&str> {
        header_str(self.headers(), X_TRANS_ID)
    }
}

pub trait HasContentType: HasSwiftFields {
    #[inline]
    fn content_type(&self) -> Option<&str> {
        header_str(self.headers(), CONTENT_TYPE)
    }
}

/// Value of the `ETag` header without surrounding quotes.
pub trait HasEtag: HasSwiftFields {
    #[inline]
    fn etag(&self) -> Option<&str> {
        header_str(self.headers(), ETAG).map(|s| s.trim_matches('"'))
    }
}

/// User metadata sent back as `X-<Kind>-Meta-*` headers.
pub trait HasMetadata: HasSwiftFields {
    /// Header prefix of the metadata, e.g. `X-Object-Meta-`.
    const META_PREFIX: &'static str;

    /// Returns the metadata keyed by the lowercase name that follows the prefix.
    fn metadata(&self) -> HashMap<String, String> {
        let prefix = Self::META_PREFIX.to_lowercase();
        self.headers()
            .iter()
            .filter_map(|(name, value)| {
                let key = name.as_str().strip_prefix(prefix.as_str())?;
                Some((key.to_string(), value.to_str().ok()?.to_string()))
            })
            .collect()
    }
}

pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

pub(crate) fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    header_str(headers, name).and_then(|v| v.trim().parse::<u64>().ok())
}

/// Decodes a JSON body; failures are logged and yield `None`.
pub(crate) fn json_entity<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice::<T>(body) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("unable to decode JSON response body: {e}");
            log::debug!("undecodable body: {}", String::from_utf8_lossy(body));
            None
        }
    }
}
