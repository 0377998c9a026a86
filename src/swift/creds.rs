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

//! Token providers

use std::fmt;

#[derive(Clone)]
/// Credentials carry the token sent as `X-Auth-Token`
pub struct Credentials {
    pub auth_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &"*****")
            .finish()
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static token provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider with given auth token
    ///
    /// # Examples
    ///
    /// ```
    /// use snappy::swift::creds::{Provider, StaticProvider};
    /// let provider = StaticProvider::new("AUTH_tk0123456789");
    /// assert_eq!(provider.fetch().auth_token, "AUTH_tk0123456789");
    /// ```
    pub fn new(auth_token: &str) -> StaticProvider {
        StaticProvider {
            creds: Credentials {
                auth_token: auth_token.to_string(),
            },
        }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
