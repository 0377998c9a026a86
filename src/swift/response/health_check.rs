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

use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [health_check()](crate::swift::client::SwiftClient::health_check) API
#[derive(Clone, Debug)]
pub struct HealthCheckResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(HealthCheckResponse);
impl_has_swift_fields!(HealthCheckResponse);

impl HealthCheckResponse {
    /// The healthcheck middleware answers `200 OK` with the body `OK`.
    pub fn is_healthy(&self) -> bool {
        self.status == StatusCode::OK && self.body.as_ref() == b"OK"
    }
}
