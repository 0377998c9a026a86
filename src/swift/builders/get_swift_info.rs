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

use crate::swift::client::SwiftClient;
use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::Multimap;
use crate::swift::response::GetSwiftInfoResponse;
use crate::swift::types::swift_request::Endpoint;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the cluster capabilities document (`GET <swift_endpoint>/info`).
///
/// This struct constructs the parameters required for the [`SwiftClient::get_swift_info`](crate::swift::client::SwiftClient::get_swift_info) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetSwiftInfo {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
}

pub type GetSwiftInfoBldr = GetSwiftInfoBuilder<((SwiftClient,), (), ())>;

impl SwiftApi for GetSwiftInfo {
    type SwiftResponse = GetSwiftInfoResponse;
}

impl ToSwiftRequest for GetSwiftInfo {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .endpoint(Endpoint::Info)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
