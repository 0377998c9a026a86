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

use crate::swift::archive::Compression;
use crate::swift::client::SwiftClient;
use crate::swift::error::ValidationErr;
use crate::swift::header_constants::*;
use crate::swift::multimap_ext::{Multimap, MultimapExt, merge_headers};
use crate::swift::response::ExtractArchiveResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for archive auto-extraction (`PUT ?extract-archive=<format>`).
///
/// This struct constructs the parameters required for the [`SwiftClient::extract_archive`](crate::swift::client::SwiftClient::extract_archive) method.
///
/// `upload_path` selects where entries land: empty for the account (top level
/// directories become containers), `container` or `container/prefix`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ExtractArchive {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    upload_path: String,
    #[builder(setter(into))] // force required
    archive: Bytes,
    #[builder(default)]
    compression: Compression,
}

pub type ExtractArchiveBldr =
    ExtractArchiveBuilder<((SwiftClient,), (), (), (String,), (Bytes,), ())>;

impl SwiftApi for ExtractArchive {
    type SwiftResponse = ExtractArchiveResponse;
}

impl ToSwiftRequest for ExtractArchive {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        let path = self.upload_path.trim_matches('/');
        let (container, object) = match path.split_once('/') {
            Some((c, o)) => (Some(c.to_string()), Some(o.to_string())),
            None if path.is_empty() => (None, None),
            None => (Some(path.to_string()), None),
        };
        if let Some(c) = &container {
            check_container_name(c)?;
        }

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        query_params.add("extract-archive", self.compression.as_str());

        let mut headers = Multimap::new();
        headers.add(ACCEPT, CONTENT_TYPE_JSON);
        let headers = merge_headers(&headers, self.extra_headers.unwrap_or_default());

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .container(container)
            .object(object)
            .query_params(query_params)
            .headers(headers)
            .body(self.archive)
            .build())
    }
}
