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

use crate::swift::builders::{CreateObject, CreateObjectBldr};
use crate::swift::client::SwiftClient;
use bytes::Bytes;

impl SwiftClient {
    /// Creates a [`CreateObject`] request builder uploading `data` as the object content.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    /// use snappy::swift::builders::ObjectExpiry;
    /// use snappy::swift::response::a_response_traits::HasEtag;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     let resp = client
    ///         .create_object("photos", "a.txt", "hello")
    ///         .expiry(ObjectExpiry::After(3600))
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("etag {:?}", resp.etag());
    /// }
    /// ```
    pub fn create_object<S1: Into<String>, S2: Into<String>, B: Into<Bytes>>(
        &self,
        container: S1,
        object: S2,
        data: B,
    ) -> CreateObjectBldr {
        CreateObject::builder()
            .client(self.clone())
            .container(container)
            .object(object)
            .data(data)
    }
}
