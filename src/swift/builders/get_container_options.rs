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
use crate::swift::header_constants::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use crate::swift::multimap_ext::{Multimap, MultimapExt, merge_headers};
use crate::swift::response::GetContainerOptionsResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for a CORS preflight (`OPTIONS`) against a container or object.
///
/// This struct constructs the parameters required for the [`SwiftClient::get_container_options`](crate::swift::client::SwiftClient::get_container_options) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetContainerOptions {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(default, setter(into, strip_option))]
    object: Option<String>,
    #[builder(default, setter(into, strip_option))]
    origin: Option<String>,
    #[builder(default, setter(into, strip_option))]
    request_method: Option<String>,
}

pub type GetContainerOptionsBldr =
    GetContainerOptionsBuilder<((SwiftClient,), (), (), (String,), (), (), ())>;

impl SwiftApi for GetContainerOptions {
    type SwiftResponse = GetContainerOptionsResponse;
}

impl ToSwiftRequest for GetContainerOptions {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        if let Some(o) = &self.object {
            check_object_name(o)?;
        }

        let mut headers = Multimap::new();
        headers.add_opt(ORIGIN, self.origin);
        headers.add_opt(
            ACCESS_CONTROL_REQUEST_METHOD,
            self.request_method.map(|m| m.to_uppercase()),
        );
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::OPTIONS)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
