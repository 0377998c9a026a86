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
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::SetTempUrlKeyResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Which of the two TempURL key slots to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TempUrlKeySlot {
    #[default]
    Primary,
    /// The `-2` key, used to rotate keys without invalidating issued URLs.
    Secondary,
}

/// Argument builder that stores a TempURL key on the account or on a container.
///
/// This struct constructs the parameters required for the [`SwiftClient::set_temp_url_key`](crate::swift::client::SwiftClient::set_temp_url_key) method.
/// An empty key removes the slot.
#[derive(Clone, TypedBuilder)]
pub struct SetTempUrlKey {
    #[builder(!default)] // force required
    client: SwiftClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    /// Stores the key on this container instead of the account.
    #[builder(default, setter(into, strip_option))]
    container: Option<String>,
    #[builder(setter(into))] // force required + accept Into<String>
    key: String,
    #[builder(default)]
    slot: TempUrlKeySlot,
}

impl std::fmt::Debug for SetTempUrlKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetTempUrlKey")
            .field("container", &self.container)
            .field("key", &"*****")
            .field("slot", &self.slot)
            .finish()
    }
}

pub type SetTempUrlKeyBldr = SetTempUrlKeyBuilder<((SwiftClient,), (), (), (), (String,), ())>;

impl SwiftApi for SetTempUrlKey {
    type SwiftResponse = SetTempUrlKeyResponse;
}

impl ToSwiftRequest for SetTempUrlKey {
    fn to_swift_request(self) -> Result<SwiftRequest, ValidationErr> {
        let header = match (&self.container, self.slot) {
            (None, TempUrlKeySlot::Primary) => X_ACCOUNT_META_TEMP_URL_KEY,
            (None, TempUrlKeySlot::Secondary) => X_ACCOUNT_META_TEMP_URL_KEY_2,
            (Some(_), TempUrlKeySlot::Primary) => X_CONTAINER_META_TEMP_URL_KEY,
            (Some(_), TempUrlKeySlot::Secondary) => X_CONTAINER_META_TEMP_URL_KEY_2,
        };
        if let Some(c) = &self.container {
            check_container_name(c)?;
        }

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(header, self.key);

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .container(self.container)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
