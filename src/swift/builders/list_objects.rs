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

use super::list_containers::add_listing_params;
use crate::swift::client::SwiftClient;
use crate::swift::deserializer::Format;
use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::ListObjectsResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the container listing (`GET` on a container).
///
/// This struct constructs the parameters required for the [`SwiftClient::list_objects`](crate::swift::client::SwiftClient::list_objects) method.
///
/// `marker` and `end_marker` are exclusive bounds: an object named exactly like either
/// of them is never listed.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListObjects {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    container: String,
    #[builder(default, setter(into, strip_option))]
    marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    end_marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    /// Rolls up names sharing a prefix up to this character into `subdir` entries.
    #[builder(default, setter(into, strip_option))]
    delimiter: Option<String>,
    #[builder(default, setter(strip_option))]
    limit: Option<u32>,
    /// Requested body encoding; the server answers in plain text when unset.
    #[builder(default, setter(into))]
    format: Option<Format>,
}

pub type ListObjectsBldr =
    ListObjectsBuilder<((SwiftClient,), (), (), (String,), (), (), (), (), (), ())>;

impl SwiftApi for ListObjects {
    type SwiftResponse = ListObjectsResponse;
}

impl ToSwiftRequest for ListObjects {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        add_listing_params(
            &mut query_params,
            self.marker,
            self.end_marker,
            self.prefix,
            self.limit,
            self.format,
        );
        query_params.add_opt("delimiter", self.delimiter);

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .container(self.container)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
