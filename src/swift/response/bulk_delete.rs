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
use crate::swift::response::a_response_traits::{HasTransId, json_entity};
use crate::swift::types::{BulkDeleteResult, FromSwiftResponse, SwiftRequest};
use crate::impl_has_swift_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [bulk_delete()](crate::swift::client::SwiftClient::bulk_delete) API
#[derive(Clone, Debug)]
pub struct BulkDeleteResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    entity: Option<BulkDeleteResult>,
}

impl_has_swift_fields!(BulkDeleteResponse);

impl HasTransId for BulkDeleteResponse {}

impl BulkDeleteResponse {
    /// Returns the decoded bulk result, or `None` when the body was not a JSON bulk result.
    pub fn entity(&self) -> Option<&BulkDeleteResult> {
        self.entity.as_ref()
    }
}

#[async_trait]
impl FromSwiftResponse for BulkDeleteResponse {
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
