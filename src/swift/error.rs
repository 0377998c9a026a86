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

//! Error definitions for Swift operations
//!
//! Client-side validation problems ([`ValidationErr`]) fail fast and are never retried.
//! Listing decode problems ([`DeserializationError`]) are recovered by the response
//! layer, which logs them and leaves the entity absent.

use thiserror::Error;

/// Errors raised before a request leaves the client, or while producing a signature.
#[derive(Error, Debug)]
pub enum ValidationErr {
    /// The storage endpoint cannot be used to address the account.
    #[error("invalid storage url '{url}': {reason}")]
    InvalidStorageUrl { url: String, reason: String },

    #[error("invalid container name '{name}': {reason}")]
    InvalidContainerName { name: String, reason: String },

    #[error("invalid object name '{name}': {reason}")]
    InvalidObjectName { name: String, reason: String },

    #[error("unsupported digest algorithm '{0}'; expected one of sha1, sha256")]
    UnsupportedDigest(String),

    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),

    /// The expiry timestamp does not fit in an `i64`.
    #[error("ttl of {ttl_seconds} seconds overflows the expiry timestamp")]
    InvalidTtl { ttl_seconds: i64 },

    #[error("unsupported archive compression '{0}'; expected one of tar, tar.gz, tar.bz2")]
    UnsupportedCompression(String),

    #[error("copy requires either a X-Copy-From or a Destination header")]
    MissingCopySource,

    #[error("invalid header '{name}': {source}")]
    InvalidHeader {
        name: String,
        #[source]
        source: http::header::InvalidHeaderValue,
    },

    #[error("url build error: {0}")]
    UrlBuildError(String),
}

/// Errors raised by a listing decoder.
///
/// A single failing record fails the whole listing.
#[derive(Error, Debug)]
pub enum DeserializationError {
    #[error("listing body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid JSON listing: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid XML listing: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("listing root is not a list; found {0}")]
    NotAList(String),

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidField { field: String, value: String },
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised while obtaining a token from the identity service.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("identity service returned HTTP status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("service '{0}' not found in service catalog")]
    ServiceNotFound(String),

    #[error("no endpoint for region '{region}' in service '{service}'")]
    RegionNotFound { service: String, region: String },

    #[error("invalid identity response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Umbrella error returned by every client operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationErr),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Io(#[from] IoError),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Http(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(IoError::IOError(err))
    }
}
