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
use crate::swift::header_constants::RANGE;
use crate::swift::multimap_ext::{Multimap, MultimapExt, merge_headers};
use crate::swift::response::GetObjectResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for downloading an object.
///
/// This struct constructs the parameters required for the [`SwiftClient::get_object`](crate::swift::client::SwiftClient::get_object) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetObject {
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
    #[builder(default, setter(strip_option))]
    offset: Option<u64>,
    #[builder(default, setter(strip_option))]
    length: Option<u64>,
}

pub type GetObjectBldr = GetObjectBuilder<((SwiftClient,), (), (), (String,), (String,), (), ())>;

impl SwiftApi for GetObject {
    type SwiftResponse = GetObjectResponse;
}

impl GetObject {
    fn get_range_header_value(&self) -> Option<String> {
        let (offset, length) = match self.length {
            Some(_) => (Some(self.offset.unwrap_or(0_u64)), self.length),
            None => (self.offset, None),
        };

        let o = offset?;
        let mut range = format!("bytes={o}-");
        if let Some(l) = length {
            range.push_str(&(o + l.max(1) - 1).to_string());
        }
        Some(range)
    }
}

impl ToSwiftRequest for GetObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers = Multimap::new();
        headers.add_opt(RANGE, self.get_range_header_value());
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
