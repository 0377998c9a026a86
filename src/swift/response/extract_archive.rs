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

use crate::swift::error::{Error, NetworkError};
use crate::swift::response::a_response_traits::{HasContainer, HasTransId, json_entity};
use crate::swift::types::{ExtractArchiveResult, FromSwiftResponse, SwiftRequest};
use crate::impl_has_swift_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [extract_archive()](crate::swift::client::SwiftClient::extract_archive) API
///
/// The bulk middleware answers `200` even when some entries failed; check
/// [`ExtractArchiveResult::status_code`] and its errors.
#[derive(Clone, Debug)]
pub struct ExtractArchiveResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    entity: Option<ExtractArchiveResult>,
}

impl_has_swift_fields!(ExtractArchiveResponse);

impl HasContainer for ExtractArchiveResponse {}
impl HasTransId for ExtractArchiveResponse {}

impl ExtractArchiveResponse {
    pub fn entity(&self) -> Option<&ExtractArchiveResult> {
        self.entity.as_ref()
    }
}

#[async_trait]
impl FromSwiftResponse for ExtractArchiveResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;
        let entity = json_entity(&body);
        Ok(Self {
            request,
            status,
            headers,
            body,
            entity,
        })
    }
}
