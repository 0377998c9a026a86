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

use crate::swift::builders::{ExtractArchive, ExtractArchiveBldr};
use crate::swift::client::SwiftClient;
use bytes::Bytes;

impl SwiftClient {
    /// Creates an [`ExtractArchive`] request builder uploading a tar archive whose entries
    /// are created under `upload_path` (empty, `<container>` or `<container>/<prefix>`).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::types::SwiftApi;
    /// use snappy::swift::archive::{Compression, create_archive};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let storage_url = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    ///     let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    ///     let archive = create_archive(&["a", "b"], Compression::Gzip).unwrap();
    ///     let resp = client
    ///         .extract_archive("photos", archive)
    ///         .compression(Compression::Gzip)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{:?}", resp.entity());
    /// }
    /// ```
    pub fn extract_archive<S: Into<String>, B: Into<Bytes>>(
        &self,
        upload_path: S,
        archive: B,
    ) -> ExtractArchiveBldr {
        ExtractArchive::builder()
            .client(self.clone())
            .upload_path(upload_path)
            .archive(archive)
    }
}
