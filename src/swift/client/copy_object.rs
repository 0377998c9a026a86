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

use crate::swift::builders::{CopyObject, CopyObjectBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`CopyObject`] request builder for `container/object`.
    ///
    /// Set `copy_from` to copy another object onto `container/object`, or `destination` to
    /// copy `container/object` elsewhere.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     client
    ///         .copy_object("backup", "a.jpg")
    ///         .copy_from("photos/a.jpg")
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn copy_object<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
    ) -> CopyObjectBldr {
        CopyObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }
}
