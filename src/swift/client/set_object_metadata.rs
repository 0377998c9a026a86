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

use crate::swift::builders::{SetObjectMetadata, SetObjectMetadataBldr};
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`SetObjectMetadata`] request builder. A `POST` replaces all user
    /// metadata of the object, and may set or clear its expiry.
    pub fn set_object_metadata<S1: Into<String>, S2: Into<String>>(
        &self,
        container: S1,
        object: S2,
    ) -> SetObjectMetadataBldr {
        SetObjectMetadata::builder()
            .client(self.clone())
            .container(container)
            .object(object)
    }
}
