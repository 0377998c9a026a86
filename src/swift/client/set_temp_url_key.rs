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

use crate::swift::builders::{SetTempUrlKey, SetTempUrlKeyBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`SetTempUrlKey`] request builder storing a TempURL key on the account,
    /// or on a container when `container` is set.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    /// use snappy::swift::builders::TempUrlKeySlot;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     client
    ///         .set_temp_url_key("secret-key")
    ///         .slot(TempUrlKeySlot::Secondary)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    pub fn set_temp_url_key<S: Into<String>>(&self, key: S) -> SetTempUrlKeyBldr {
        SetTempUrlKey::builder().client(self.clone()).key(key)
    }
}
