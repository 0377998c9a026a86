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

use crate::swift::header_constants::{CONTENT_DISPOSITION, X_OBJECT_META_PREFIX};
use crate::swift::response::a_response_traits::{
    HasContainer, HasContentType, HasEtag, HasMetadata, HasObject, HasTransId, header_str,
};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [get_object()](crate::swift::client::SwiftClient::get_object) API
#[derive(Clone, Debug)]
pub struct GetObjectResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(GetObjectResponse);
impl_has_swift_fields!(GetObjectResponse);

impl HasContainer for GetObjectResponse {}
impl HasObject for GetObjectResponse {}
impl HasTransId for GetObjectResponse {}
impl HasEtag for GetObjectResponse {}
impl HasContentType for GetObjectResponse {}
impl HasMetadata for GetObjectResponse {
    const META_PREFIX: &'static str = X_OBJECT_META_PREFIX;
}

impl GetObjectResponse {
    /// Returns the object content, or the requested range of it.
    pub fn content(&self) -> &Bytes {
        &self.body
    }

    pub fn content_disposition(&self) -> Option<&str> {
        header_str(&self.headers, CONTENT_DISPOSITION)
    }
}
