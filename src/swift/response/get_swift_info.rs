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

use crate::swift::response::a_response_traits::json_entity;
use crate::swift::error::{Error, NetworkError};
use crate::swift::types::{FromSwiftResponse, SwiftInfo, SwiftRequest};
use crate::impl_has_swift_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::{Map, Value};
use std::mem;

/// Response of [get_swift_info()](crate::swift::client::SwiftClient::get_swift_info) API
#[derive(Clone, Debug)]
pub struct GetSwiftInfoResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    entity: Option<SwiftInfo>,
}

impl_has_swift_fields!(GetSwiftInfoResponse);

impl GetSwiftInfoResponse {
    /// Returns the capabilities document, or `None` when `/info` is disabled or unreadable.
    pub fn entity(&self) -> Option<&SwiftInfo> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<SwiftInfo> {
        self.entity
    }
}

#[async_trait]
impl FromSwiftResponse for GetSwiftInfoResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;
        let entity = if status.is_success() {
            json_entity::<Map<String, Value>>(&body).map(SwiftInfo::new)
        } else {
            None
        };
        Ok(Self {
            request,
            status,
            headers,
            body,
            entity,
        })
    }
}
