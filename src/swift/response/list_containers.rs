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

use crate::swift::deserializer::deserialize_listing;
use crate::swift::error::{Error, NetworkError};
use crate::swift::header_constants::CONTENT_TYPE;
use crate::swift::response::a_response_traits::{HasContentType, HasTransId, header_str};
use crate::swift::types::{Container, FromSwiftResponse, ListingEntry, SwiftRequest};
use crate::impl_has_swift_fields;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use std::mem;

/// Response of [list_containers()](crate::swift::client::SwiftClient::list_containers) API
#[derive(Clone, Debug)]
pub struct ListContainersResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    entity: Option<Vec<Container>>,
}

impl_has_swift_fields!(ListContainersResponse);

impl HasTransId for ListContainersResponse {}
impl HasContentType for ListContainersResponse {}

impl ListContainersResponse {
    /// Returns the decoded listing, or `None` when the body could not be decoded.
    ///
    /// The raw body and the status stay available through
    /// [`HasSwiftFields`](crate::swift::response::a_response_traits::HasSwiftFields).
    pub fn entity(&self) -> Option<&[Container]> {
        self.entity.as_deref()
    }

    pub fn into_entity(self) -> Option<Vec<Container>> {
        self.entity
    }
}

#[async_trait]
impl FromSwiftResponse for ListContainersResponse {
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

/// Decodes a listing body according to its `Content-Type`, whatever the status.
pub(crate) fn listing_entity<T: ListingEntry>(headers: &HeaderMap, body: &[u8]) -> Option<Vec<T>> {
    deserialize_listing(header_str(headers, CONTENT_TYPE), body)
}
