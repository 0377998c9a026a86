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
use crate::swift::response::BulkDeleteResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::urlencode_object_key;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the bulk delete middleware (`DELETE ?bulk-delete`).
///
/// This struct constructs the parameters required for the [`SwiftClient::bulk_delete`](crate::swift::client::SwiftClient::bulk_delete) method.
/// Each target is either `container` or `container/object`; containers must be empty
/// to be deleted.
#[derive(Clone, Debug, TypedBuilder)]
pub struct BulkDelete {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(!default)] // force required
    targets: Vec<String>,
}

pub type BulkDeleteBldr = BulkDeleteBuilder<((SwiftClient,), (), (), (Vec<String>,))>;

impl SwiftApi for BulkDelete {
    type SwiftResponse = BulkDeleteResponse;
}

/// Builds the newline separated, percent-encoded body of a bulk delete.
pub fn bulk_delete_body(targets: &[String]) -> String {
    targets
        .iter()
        .map(|t| urlencode_object_key(t.trim_start_matches('/')))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ToSwiftRequest for BulkDelete {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("bulk-delete", "");

        let mut headers = Multimap::new();
        headers.add(CONTENT_TYPE, CONTENT_TYPE_TEXT);
        headers.add(ACCEPT, CONTENT_TYPE_JSON);
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        let body = Bytes::from(bulk_delete_body(&self.targets));

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .query_params(query_params)
            .headers(headers)
            .body(body)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_delete_body() {
        let targets = vec![
            "c1/a b".to_string(),
            "/c1/dir/o".to_string(),
            "c2".to_string(),
        ];
        assert_eq!(bulk_delete_body(&targets), "c1/a%20b\nc1/dir/o\nc2");
    }
}
