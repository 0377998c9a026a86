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

//! SwiftRequest struct and implementation for executing HTTP requests.

use crate::swift::client::SwiftClient;
use crate::swift::error::Error;
use crate::swift::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// Which endpoint a request is addressed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// Account, container or object under the storage URL.
    #[default]
    Storage,
    /// `<swift_endpoint>/info`
    Info,
    /// `<scheme>://<host>/healthcheck`
    HealthCheck,
}

#[derive(Clone, Debug, TypedBuilder)]
/// Generic SwiftRequest
pub struct SwiftRequest {
    #[builder(!default)] // force required
    pub(crate) client: SwiftClient,

    #[builder(!default)] // force required
    pub(crate) method: Method,

    #[builder(default)]
    pub(crate) endpoint: Endpoint,

    #[builder(default, setter(into))]
    pub(crate) container: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    pub(crate) headers: Multimap,

    #[builder(default, setter(into))]
    pub(crate) body: Option<Bytes>,
}

impl SwiftRequest {
    /// Returns the HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the query parameters sent with the request.
    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    /// Returns the caller supplied headers of the request.
    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the response. Only used in [`SwiftApi::send()`](crate::swift::types::SwiftApi::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                self.endpoint,
                &self.headers,
                &self.query_params,
                self.container.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
            )
            .await
    }
}
