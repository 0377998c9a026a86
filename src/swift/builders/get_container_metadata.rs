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
use crate::swift::response::GetContainerMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for reading container metadata (`HEAD` on the container).
///
/// This struct constructs the parameters required for the [`SwiftClient::get_container_metadata`](crate::swift::client::SwiftClient::get_container_metadata) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetContainerMetadata {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
}

pub type GetContainerMetadataBldr =
    GetContainerMetadataBuilder<((SwiftClient,), (), (), (String,))>;

impl SwiftApi for GetContainerMetadata {
    type SwiftResponse = GetContainerMetadataResponse;
}

impl ToSwiftRequest for GetContainerMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .container(self.container)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
