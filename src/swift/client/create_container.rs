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

use crate::swift::builders::{CreateContainer, CreateContainerBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`CreateContainer`] request builder.
    ///
    /// To execute the request, call [`CreateContainer::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a [`CreateContainerResponse`](crate::swift::response::CreateContainerResponse).
    /// The server answers `201` for a new container and `202` for an existing one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    /// use snappy::swift::response::a_response_traits::HasSwiftFields;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     let resp = client.create_container("photos").build().send().await.unwrap();
    ///     println!("status {}", resp.status());
    /// }
    /// ```
    pub fn create_container<S: Into<String>>(&self, container: S) -> CreateContainerBldr {
        CreateContainer::builder()
            .client(self.clone())
            .container(container)
    }
}
