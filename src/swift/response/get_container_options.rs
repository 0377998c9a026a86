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

use crate::swift::header_constants::{ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW};
use crate::swift::response::a_response_traits::{
    HasContainer, HasObject, HasTransId, header_str,
};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [get_container_options()](crate::swift::client::SwiftClient::get_container_options) API
///
/// A CORS preflight that the container allows is answered with `200` and the
/// `Access-Control-Allow-*` headers; a refused one with `401`.
#[derive(Clone, Debug)]
pub struct GetContainerOptionsResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(GetContainerOptionsResponse);
impl_has_swift_fields!(GetContainerOptionsResponse);

impl HasContainer for GetContainerOptionsResponse {}
impl HasObject for GetContainerOptionsResponse {}
impl HasTransId for GetContainerOptionsResponse {}

impl GetContainerOptionsResponse {
    /// Value of `Access-Control-Allow-Origin`.
    pub fn allow_origin(&self) -> Option<&str> {
        header_str(&self.headers, ACCESS_CONTROL_ALLOW_ORIGIN)
    }

    /// Methods listed in the `Allow` header.
    pub fn allowed_methods(&self) -> Vec<String> {
        header_str(&self.headers, ALLOW)
            .map(|v| {
                v.split(',')
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
