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
    CONTENT_DISPOSITION, CONTENT_LENGTH, X_DELETE_AT, X_OBJECT_META_PREFIX,
};
use crate::swift::response::a_response_traits::{
    HasContainer, HasContentType, HasEtag, HasMetadata, HasObject, HasTransId, header_str,
    header_u64,
};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [get_object_metadata()](crate::swift::client::SwiftClient::get_object_metadata) API
#[derive(Clone, Debug)]
pub struct GetObjectMetadataResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(GetObjectMetadataResponse);
impl_has_swift_fields!(GetObjectMetadataResponse);

impl HasContainer for GetObjectMetadataResponse {}
impl HasObject for GetObjectMetadataResponse {}
impl HasTransId for GetObjectMetadataResponse {}
impl HasEtag for GetObjectMetadataResponse {}
impl HasContentType for GetObjectMetadataResponse {}
impl HasMetadata for GetObjectMetadataResponse {
    const META_PREFIX: &'static str = X_OBJECT_META_PREFIX;
}

impl GetObjectMetadataResponse {
    pub fn content_length(&self) -> Option<u64> {
        header_u64(&self.headers, CONTENT_LENGTH)
    }

    /// Unix time at which the object expires, from `X-Delete-At`.
    pub fn delete_at(&self) -> Option<i64> {
        header_str(&self.headers, X_DELETE_AT).and_then(|v| v.trim().parse::<i64>().ok())
    }

    pub fn content_disposition(&self) -> Option<&str> {
        header_str(&self.headers, CONTENT_DISPOSITION)
    }
}
