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

use crate::swift::response::a_response_traits::{HasContainer, HasObject, HasTransId};
use crate::swift::types::SwiftRequest;
use crate::{impl_from_swift_response, impl_has_swift_fields};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};

/// Response of [delete_object()](crate::swift::client::SwiftClient::delete_object) API
#[derive(Clone, Debug)]
pub struct DeleteObjectResponse {
    request: SwiftRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl_from_swift_response!(DeleteObjectResponse);
impl_has_swift_fields!(DeleteObjectResponse);

impl HasContainer for DeleteObjectResponse {}
impl HasObject for DeleteObjectResponse {}
impl HasTransId for DeleteObjectResponse {}
