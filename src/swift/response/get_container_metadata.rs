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

use crate::swift::header_constants::{
    X_CONTAINER_BYTES_USED, X_CONTAINER_META_PREFIX, X_CONTAINER_OBJECT_COUNT,
};
use crate::swift::response::a_response_traits::{
    HasContainer, HasMetadata, HasTransId, header_u64,
};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [get_container_metadata()](crate::swift::client::SwiftClient::get_container_metadata) API
#[derive(Clone, Debug)]
pub struct GetContainerMetadataResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(GetContainerMetadataResponse);
impl_has_swift_fields!(GetContainerMetadataResponse);

impl HasContainer for GetContainerMetadataResponse {}
impl HasTransId for GetContainerMetadataResponse {}
impl HasMetadata for GetContainerMetadataResponse {
    const META_PREFIX: &'static str = X_CONTAINER_META_PREFIX;
}

impl GetContainerMetadataResponse {
    pub fn object_count(&self) -> Option<u64> {
        header_u64(&self.headers, X_CONTAINER_OBJECT_COUNT)
    }

    pub fn bytes_used(&self) -> Option<u64> {
        header_u64(&self.headers, X_CONTAINER_BYTES_USED)
    }
}
