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
use crate::swift::response::CreateObjectResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, check_object_name, metadata_headers};
use bytes::Bytes;
use http::Method;
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// Scheduled deletion of an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectExpiry {
    /// `X-Delete-At`: absolute unix timestamp.
    At(i64),
    /// `X-Delete-After`: seconds from now; the server converts it to `X-Delete-At`.
    After(u64),
}

impl ObjectExpiry {
    pub(crate) fn add_to(&self, headers: &mut Multimap) {
        match self {
            ObjectExpiry::At(ts) => headers.add(X_DELETE_AT, ts.to_string()),
            ObjectExpiry::After(secs) => headers.add(X_DELETE_AFTER, secs.to_string()),
        }
    }
}

/// Argument builder for uploading an object (`PUT` on the object).
///
/// This struct constructs the parameters required for the [`SwiftClient::create_object`](crate::swift::client::SwiftClient::create_object) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateObject {
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
    #[builder(setter(into))] // force required
    data: Bytes,
    #[builder(default, setter(into, strip_option))]
    content_type: Option<String>,
    #[builder(default, setter(into))]
    expiry: Option<ObjectExpiry>,
    /// Sent as `X-Object-Meta-<key>`.
    #[builder(default)]
    metadata: HashMap<String, String>,
}

pub type CreateObjectBldr =
    CreateObjectBuilder<((SwiftClient,), (), (), (String,), (String,), (Bytes,), (), (), ())>;

impl SwiftApi for CreateObject {
    type SwiftResponse = CreateObjectResponse;
}

impl ToSwiftRequest for CreateObject {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        check_container_name(&self.container)?;
        check_object_name(&self.object)?;

        let mut headers = metadata_headers(X_OBJECT_META_PREFIX, &self.metadata);
        headers.add_opt(CONTENT_TYPE, self.content_type);
        if let Some(expiry) = &self.expiry {
            expiry.add_to(&mut headers);
        }
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .container(self.container)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .body(self.data)
            .build())
    }
}
