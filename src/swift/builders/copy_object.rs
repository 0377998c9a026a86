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
use crate::swift::header_constants::*;
use crate::swift::multimap_ext::{Multimap, MultimapExt, merge_headers};
use crate::swift::response::CopyObjectResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name, urlencode_object_key};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for server side copy.
///
/// This struct constructs the parameters required for the [`SwiftClient::copy_object`](crate::swift::client::SwiftClient::copy_object) method.
///
/// With `copy_from` (`<container>/<object>`) the request is a zero length `PUT` to
/// `container/object` carrying `X-Copy-From`. With `destination` it is a `COPY` of
/// `container/object` carrying `Destination`. One of the two is required; `copy_from`
/// wins when both are set.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
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
    #[builder(default, setter(into, strip_option))]
    copy_from: Option<String>,
    #[builder(default, setter(into, strip_option))]
    destination: Option<String>,
}

pub type CopyObjectBldr = CopyObjectBuilder<((SwiftClient,), (), (), (String,), (String,), (), ())>;

impl SwiftApi for CopyObject {
    type SwiftResponse = CopyObjectResponse;
}

fn copy_path(path: &str) -> String {
    format!("/{}", urlencode_object_key(path.trim_start_matches('/')))
}

impl ToSwiftRequest for CopyObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers = Multimap::new();
        let method = match (&self.copy_from, &self.destination) {
            (Some(source), _) => {
                headers.add(X_COPY_FROM, copy_path(source));
                headers.add(CONTENT_LENGTH, "0");
                Method::PUT
            }
            (None, Some(destination)) => {
                headers.add(DESTINATION, copy_path(destination));
                Method::from_bytes(b"COPY")
                    .map_err(|_| ValidationErr::InvalidMethod(String::from("COPY")))?
            }
            (None, None) => return Err(ValidationErr::MissingCopySource),
        };
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(method)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
