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

use crate::cleanup_guard::CleanupGuard;
use crate::utils::rand_container_name;
use snappy::swift::auth::authenticate_with;
use snappy::swift::config::{FeatureSet, ObjectStorageConfig};
use snappy::swift::creds::StaticProvider;
use snappy::swift::http::StorageUrl;
use snappy::swift::response::a_response_traits::HasSwiftFields;
use snappy::swift::signer::DigestAlgorithm;
use snappy::swift::types::{SwiftApi, SwiftInfo};
use snappy::swift::{SwiftClient, SwiftClientBuilder};

#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: SwiftClient,
    pub storage_url: StorageUrl,
    pub config: ObjectStorageConfig,
    pub features: FeatureSet,
    pub swift_info: Option<SwiftInfo>,
}

impl TestContext {
    /// Builds a context from `SWIFT_*` environment variables.
    ///
    /// Returns `None` when no storage endpoint is configured, so that tests can be
    /// skipped offline.
    pub async fn new_from_env() -> Option<Self> {
        let config = ObjectStorageConfig::from_env();
        if !config.is_configured() {
            return None;
        }

        let (storage_url, auth_token) = match (&config.auth_endpoint, &config.auth_token) {
            (Some(endpoint), None) => {
                let http_client = reqwest::Client::builder()
                    .danger_accept_invalid_certs(config.ignore_cert_check)
                    .build()
                    .unwrap();
                let username = config.username.clone().unwrap_or_default();
                let api_key = config.api_key.clone().unwrap_or_default();
                let resp = authenticate_with(&http_client, endpoint, &username, &api_key)
                    .await
                    .unwrap();
                let storage_url = match &config.storage_url {
                    Some(url) => url.clone(),
                    None => resp
                        .storage_url(&config.service_name, config.region.as_deref())
                        .unwrap(),
                };
                (storage_url, Some(resp.token().to_string()))
            }
            _ => (
                config.storage_url.clone().unwrap(),
                config.auth_token.clone(),
            ),
        };
        log::debug!("SWIFT_STORAGE_URL={storage_url}");
        log::debug!("SWIFT_AUTH_TOKEN=*****");

        let storage_url: StorageUrl = storage_url.parse().unwrap();
        let client = SwiftClientBuilder::new(storage_url.clone())
            .provider(auth_token.as_deref().map(StaticProvider::new))
            .ignore_cert_check(Some(config.ignore_cert_check))
            .build()
            .unwrap();

        let swift_info = if config.use_swift_info {
            client
                .get_swift_info()
                .build()
                .send()
                .await
                .ok()
                .and_then(|resp| resp.into_entity())
        } else {
            None
        };
        let features = config.feature_set(
            swift_info
                .as_ref()
                .map(SwiftInfo::features)
                .unwrap_or_default(),
        );
        log::debug!("features: {features:?}");

        Some(Self {
            client,
            storage_url,
            config,
            features,
            swift_info,
        })
    }

    /// Returns whether the cluster supports all `required` features.
    pub fn supports(&self, required: &[&str]) -> bool {
        self.features.supports(required)
    }

    /// Returns whether TempURLs signed with `digest` are accepted.
    ///
    /// SHA1 is assumed; SHA256 must be listed in the `/info` tempurl section.
    pub fn supports_temp_url_digest(&self, digest: DigestAlgorithm) -> bool {
        match digest {
            DigestAlgorithm::Sha1 => true,
            DigestAlgorithm::Sha256 => self
                .swift_info
                .as_ref()
                .is_some_and(|info| info.tempurl_digests().iter().any(|d| d == "sha256")),
        }
    }

    /// Creates a temporary container with an automatic cleanup guard.
    ///
    /// # Returns
    /// A tuple containing:
    /// - `String` - The name of the created container.
    /// - `CleanupGuard` - A guard whose `cleanup()` deletes the container and its objects.
    pub async fn create_container_helper(&self) -> (String, CleanupGuard) {
        let container = rand_container_name(&self.config.base_container_name);
        let resp = self
            .client
            .create_container(&container)
            .build()
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success(), "creating {container}: {}", resp.status());
        let guard = CleanupGuard::new(self.client.clone(), &container);
        (container, guard)
    }

    /// Uploads one small object per name, with the name as content.
    pub async fn create_objects<S: AsRef<str>>(&self, container: &str, names: &[S]) {
        for name in names {
            let name = name.as_ref();
            let resp = self
                .client
                .create_object(container, name, name.to_string())
                .build()
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), http::StatusCode::CREATED, "uploading {name}");
        }
    }

    /// Stores `key` as the account TempURL key and waits for proxies to pick it up.
    pub async fn set_account_temp_url_key(&self, key: &str) {
        let resp = self
            .client
            .set_temp_url_key(key)
            .build()
            .send()
            .await
            .unwrap();
        assert!(resp.status().is_success(), "setting key: {}", resp.status());
        if self.config.tempurl_key_cache_time > 0 {
            tokio::time::sleep(std::time::Duration::from_secs(
                self.config.tempurl_key_cache_time,
            ))
            .await;
        }
    }
}
