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
use crate::swift::deserializer::Format;
use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::ListContainersResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the account listing (`GET` on the account).
///
/// This struct constructs the parameters required for the [`SwiftClient::list_containers`](crate::swift::client::SwiftClient::list_containers) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListContainers {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Only containers sorting after this name are listed.
    #[builder(default, setter(into, strip_option))]
    marker: Option<String>,
    /// Only containers sorting before this name are listed.
    #[builder(default, setter(into, strip_option))]
    end_marker: Option<String>,
    #[builder(default, setter(into, strip_option))]
    prefix: Option<String>,
    #[builder(default, setter(strip_option))]
    limit: Option<u32>,
    /// Requested body encoding; the server answers in plain text when unset.
    #[builder(default, setter(into))]
    format: Option<Format>,
}

pub type ListContainersBldr = ListContainersBuilder<((SwiftClient,), (), (), (), (), (), (), ())>;

impl SwiftApi for ListContainers {
    type SwiftResponse = ListContainersResponse;
}

/// Adds the listing query parameters shared by account and container listings.
pub(crate) fn add_listing_params(
    query_params: &mut Multimap,
    marker: Option<String>,
    end_marker: Option<String>,
    prefix: Option<String>,
    limit: Option<u32>,
    format: Option<Format>,
) {
    query_params.add_opt("marker", marker);
    query_params.add_opt("end_marker", end_marker);
    query_params.add_opt("prefix", prefix);
    query_params.add_opt("limit", limit.map(|v| v.to_string()));
    query_params.add_opt("format", format.map(|f| f.as_query_value()));
}

impl ToSwiftRequest for ListContainers {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        add_listing_params(
            &mut query_params,
            self.marker,
            self.end_marker,
            self.prefix,
            self.limit,
            self.format,
        );

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
