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
use crate::swift::header_constants::X_CONTAINER_META_PREFIX;
use crate::swift::multimap_ext::{Multimap, merge_headers};
use crate::swift::response::SetContainerMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, metadata_headers};
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for updating container metadata (`POST` on the container).
///
/// This struct constructs the parameters required for the [`SwiftClient::set_container_metadata`](crate::swift::client::SwiftClient::set_container_metadata) method.
/// Keys are sent as `X-Container-Meta-<key>`; an empty value removes the key.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetContainerMetadata {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(default)]
    metadata: HashMap<String, String>,
}

pub type SetContainerMetadataBldr =
    SetContainerMetadataBuilder<((SwiftClient,), (), (), (String,), ())>;

impl SwiftApi for SetContainerMetadata {
    type SwiftResponse = SetContainerMetadataResponse;
}

impl ToSwiftRequest for SetContainerMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;

        let headers = merge_headers(
            &metadata_headers(X_CONTAINER_META_PREFIX, &self.metadata),
            self.extra_headers.unwrap_or_default(),
        );

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .container(self.container)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
