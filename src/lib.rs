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

//! # Snappy
//!
//! A strongly-typed, async client for OpenStack Swift compatible object storage,
//! built to drive protocol-level verification of a storage cluster.
//!
//! Each supported operation has a corresponding request builder (e.g.,
//! [`swift::builders::ListObjects`], [`swift::builders::CreateObject`]), which allows users
//! to configure request parameters using a fluent builder pattern. All request builders
//! implement the [`swift::types::SwiftApi`] trait, which provides the async
//! [`send`](crate::swift::types::SwiftApi::send) method.
//!
//! Two pieces are computed locally and never touch the network:
//!
//! - [`swift::signer`] produces TempURL signatures (HMAC-SHA1 or HMAC-SHA256 over
//!   `METHOD\nEXPIRES\nPATH`).
//! - [`swift::deserializer`] turns account and container listings (plain text, JSON or
//!   XML) into typed [`swift::types::Container`] and [`swift::types::StorageObject`]
//!   records.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use snappy::swift::SwiftClient;
//! use snappy::swift::creds::StaticProvider;
//! use snappy::swift::deserializer::Format;
//! use snappy::swift::http::StorageUrl;
//! use snappy::swift::types::SwiftApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let storage_url: StorageUrl = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
//!     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
//!
//!     let resp = client
//!         .list_objects("my-container")
//!         .format(Format::Json)
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     for object in resp.entity().unwrap_or_default() {
//!         println!("{:?}", object.name);
//!     }
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`swift::SwiftClient`] returns a builder struct
//! - Builders implement [`swift::types::ToSwiftRequest`] for request conversion and
//!   [`swift::types::SwiftApi`] for execution
//! - Responses implement [`swift::types::FromSwiftResponse`]; any HTTP status is a
//!   successful response, only transport failures are errors

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod swift;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
