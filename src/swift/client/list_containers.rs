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

use crate::swift::builders::{ListContainers, ListContainersBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`ListContainers`] request builder.
    ///
    /// To execute the request, call [`ListContainers::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`ListContainersResponse`](crate::swift::response::ListContainersResponse).
    /// One call returns one page; pass the last name seen as `marker` to get the next.
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
    ///         .list_containers()
    ///         .format(Format::Xml)
    ///         .limit(100)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for container in resp.entity().unwrap_or_default() {
    ///         println!("{} holds {:?} objects", container.name, container.object_count);
    ///     }
    /// }
    /// ```
    pub fn list_containers(&self) -> ListContainersBldr {
        ListContainers::builder().client(self.clone())
    }
}
