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

//! Core traits for Swift request and response handling.

use super::swift_request::SwiftRequest;
use crate::swift::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete Swift HTTP request.
///
/// This trait is implemented by all request builders and is the first step of the
/// pipeline driven by [`SwiftApi::send`].
pub trait ToSwiftRequest: Sized {
    /// Consumes this request builder and returns a [`SwiftRequest`].
    ///
    /// # Returns
    ///
    /// * `Result<SwiftRequest, ValidationErr>` - The executable request on success, or an
    ///   error if the arguments fail client-side validation.
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into strongly typed Swift responses.
///
/// Any HTTP status is a valid response. Implementations only fail on transport errors
/// and never on a body they cannot decode.
#[async_trait]
pub trait FromSwiftResponse: Sized {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Trait that defines a common interface for all Swift API request builders.
///
/// # Type Parameters
///
/// * `SwiftResponse` - The response type associated with this request builder.
#[async_trait]
pub trait SwiftApi: ToSwiftRequest {
    type SwiftResponse: FromSwiftResponse;

    /// Sends the request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::SwiftResponse, Error> {
        let mut req: SwiftRequest = self.to_swift_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::SwiftResponse::from_swift_response(req, resp).await
    }
}
