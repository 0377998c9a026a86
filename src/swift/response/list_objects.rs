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

use super::list_containers::listing_entity;
use crate::swift::error::{Error, NetworkError};
use crate::swift::header_constants::X_CONTAINER_OBJECT_COUNT;
use crate::swift::response::a_response_traits::{
    HasContainer, HasContentType, HasTransId, header_u64,
};
use crate::swift::types::{FromSwiftResponse, StorageObject, SwiftRequest};
use crate::impl_has_swift_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [list_objects()](crate::swift::client::SwiftClient::list_objects) API
#[derive(Clone, Debug)]
pub struct ListObjectsResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    entity: Option<Vec<StorageObject>>,
}

impl_has_swift_fields!(ListObjectsResponse);

impl HasContainer for ListObjectsResponse {}
impl HasTransId for ListObjectsResponse {}
impl HasContentType for ListObjectsResponse {}

impl ListObjectsResponse {
    /// Returns the decoded listing, or `None` when the body could not be decoded.
    pub fn entity(&self) -> Option<&[StorageObject]> {
        self.entity.as_deref()
    }

    pub fn into_entity(self) -> Option<Vec<StorageObject>> {
        self.entity
    }

    /// `X-Container-Object-Count` reported alongside the listing.
    pub fn object_count(&self) -> Option<u64> {
        header_u64(&self.headers, X_CONTAINER_OBJECT_COUNT)
    }

    /// Names of the listed objects, in listing order. Empty without an entity.
    pub fn names(&self) -> Vec<&str> {
        self.entity
            .iter()
            .flatten()
            .map(|o| o.name.as_str())
            .collect()
    }
}

#[async_trait]
impl FromSwiftResponse for ListObjectsResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let status = resp.status();
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;
        let entity = listing_entity(&headers, &body);
        Ok(Self {
            request,
            status,
            headers,
            body,
            entity,
        })
    }
}
