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

use super::ObjectExpiry;
use crate::swift::client::SwiftClient;
use crate::swift::error::ValidationErr;
use crate::swift::header_constants::X_OBJECT_META_PREFIX;
use crate::swift::multimap_ext::{Multimap, merge_headers};
use crate::swift::response::SetObjectMetadataResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name, metadata_headers};
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Argument builder for replacing object metadata (`POST` on the object).
///
/// This struct constructs the parameters required for the [`SwiftClient::set_object_metadata`](crate::swift::client::SwiftClient::set_object_metadata) method.
/// A `POST` replaces every `X-Object-Meta-*` key of the object.
#[derive(Clone, Debug, TypedBuilder)]
pub struct SetObjectMetadata {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,
    #[builder(default)]
    metadata: HashMap<String, String>,
    #[builder(default, setter(into))]
    expiry: Option<ObjectExpiry>,
}

pub type SetObjectMetadataBldr =
    SetObjectMetadataBuilder<((SwiftClient,), (), (), (String,), (String,), (), ())>;

impl SwiftApi for SetObjectMetadata {
    type SwiftResponse = SetObjectMetadataResponse;
}

impl ToSwiftRequest for SetObjectMetadata {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers = metadata_headers(X_OBJECT_META_PREFIX, &self.metadata);
        if let Some(expiry) = &self.expiry {
            expiry.add_to(&mut headers);
        }
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
