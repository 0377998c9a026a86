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

use crate::swift::builders::{ListObjects, ListObjectsBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`ListObjects`] request builder.
    ///
    /// To execute the request, call [`ListObjects::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ListObjectsResponse`](crate::swift::response::ListObjectsResponse).
    /// The listing is decoded according to the `Content-Type` the server picked; an
    /// undecodable body leaves the entity unset.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    /// use snappy::swift::deserializer::Format;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     let resp = client
    ///         .list_objects("photos")
    ///         .prefix("2024/")
    ///         .delimiter("/")
    ///         .format(Format::Json)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for object in resp.entity().unwrap_or_default() {
    ///         println!("{} ({:?} bytes)", object.name, object.byte_count);
    ///     }
    /// }
    /// ```
    pub fn list_objects<S: Into<String>>(&self, container: S) -> ListObjectsBldr {
        ListObjects::builder().client(self.clone()).container(container)
    }
}
