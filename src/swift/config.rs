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

//! Cluster settings read from the environment
//!
//! Every setting is optional. A missing or unparsable value falls back to the default
//! of a stock Swift cluster.

use std::collections::BTreeSet;
use std::str::FromStr;

/// Feature list value enabling every gated check.
pub const ALL_FEATURES: &str = "__ALL__";
/// Feature list value disabling every gated check.
pub const NO_FEATURES: &str = "__NONE__";

const DEFAULT_SERVICE_NAME: &str = "cloudFiles";
const DEFAULT_TEMPURL_KEY_CACHE_TIME: u64 = 0;
const DEFAULT_OBJECT_DELETION_WAIT_INTERVAL: u64 = 70;
const DEFAULT_BULK_DELETE_MAX_COUNT: u64 = 1000;
const DEFAULT_CONTAINER_LISTING_LIMIT: u64 = 10000;

/// Settings of the cluster under verification.
#[derive(Clone, Default)]
pub struct ObjectStorageConfig {
    /// `SWIFT_STORAGE_URL`
    pub storage_url: Option<String>,
    /// `SWIFT_AUTH_TOKEN`, a pre-fetched token; skips authentication when set.
    pub auth_token: Option<String>,
    /// `SWIFT_AUTH_ENDPOINT`, identity service base URL.
    pub auth_endpoint: Option<String>,
    pub username: Option<String>,
    pub api_key: Option<String>,
    /// Catalog entry holding the object storage endpoints.
    pub service_name: String,
    pub region: Option<String>,
    /// Prepended to every container created by the verification suite.
    pub base_container_name: String,
    /// Whitespace separated feature names, or `__ALL__` / `__NONE__`.
    pub features: String,
    pub excluded_features: String,
    /// Merge the sections of `/info` into the feature set.
    pub use_swift_info: bool,
    /// Seconds a TempURL key change may take to become effective.
    pub tempurl_key_cache_time: u64,
    /// Seconds to wait for the object expirer after `X-Delete-At` passes.
    pub object_deletion_wait_interval: u64,
    pub bulk_delete_max_count: u64,
    pub container_listing_limit: u64,
    pub ignore_cert_check: bool,
}

impl std::fmt::Debug for ObjectStorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectStorageConfig")
            .field("storage_url", &self.storage_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "*****"))
            .field("auth_endpoint", &self.auth_endpoint)
            .field("username", &self.username)
            .field("api_key", &self.api_key.as_ref().map(|_| "*****"))
            .field("service_name", &self.service_name)
            .field("region", &self.region)
            .field("base_container_name", &self.base_container_name)
            .field("features", &self.features)
            .field("excluded_features", &self.excluded_features)
            .field("use_swift_info", &self.use_swift_info)
            .field("tempurl_key_cache_time", &self.tempurl_key_cache_time)
            .field(
                "object_deletion_wait_interval",
                &self.object_deletion_wait_interval,
            )
            .field("bulk_delete_max_count", &self.bulk_delete_max_count)
            .field("container_listing_limit", &self.container_listing_limit)
            .field("ignore_cert_check", &self.ignore_cert_check)
            .finish()
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    match env_opt(name) {
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid value '{v}' for {name}");
            default
        }),
        None => default,
    }
}

impl ObjectStorageConfig {
    /// Reads the configuration from `SWIFT_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(env_opt, env_parse::<u64>, env_parse::<bool>)
    }

    fn from_lookup(
        opt: impl Fn(&str) -> Option<String>,
        num: impl Fn(&str, u64) -> u64,
        flag: impl Fn(&str, bool) -> bool,
    ) -> Self {
        let config = Self {
            storage_url: opt("SWIFT_STORAGE_URL"),
            auth_token: opt("SWIFT_AUTH_TOKEN"),
            auth_endpoint: opt("SWIFT_AUTH_ENDPOINT"),
            username: opt("SWIFT_USERNAME"),
            api_key: opt("SWIFT_API_KEY"),
            service_name: opt("SWIFT_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            region: opt("SWIFT_REGION"),
            base_container_name: opt("SWIFT_BASE_CONTAINER_NAME").unwrap_or_default(),
            features: opt("SWIFT_FEATURES").unwrap_or_default(),
            excluded_features: opt("SWIFT_EXCLUDED_FEATURES").unwrap_or_default(),
            use_swift_info: flag("SWIFT_USE_SWIFT_INFO", true),
            tempurl_key_cache_time: num(
                "SWIFT_TEMPURL_KEY_CACHE_TIME",
                DEFAULT_TEMPURL_KEY_CACHE_TIME,
            ),
            object_deletion_wait_interval: num(
                "SWIFT_OBJECT_DELETION_WAIT_INTERVAL",
                DEFAULT_OBJECT_DELETION_WAIT_INTERVAL,
            ),
            bulk_delete_max_count: num(
                "SWIFT_BULK_DELETE_MAX_COUNT",
                DEFAULT_BULK_DELETE_MAX_COUNT,
            ),
            container_listing_limit: num(
                "SWIFT_CONTAINER_LISTING_LIMIT",
                DEFAULT_CONTAINER_LISTING_LIMIT,
            ),
            ignore_cert_check: flag("SWIFT_IGNORE_CERT_CHECK", false),
        };
        log::debug!("{config:?}");
        config
    }

    /// Returns true when either a storage URL or an identity endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.storage_url.is_some() || self.auth_endpoint.is_some()
    }

    /// Builds the feature set from the configured lists and, when enabled, the
    /// sections published by `/info`.
    pub fn feature_set<I, S>(&self, swift_info_features: I) -> FeatureSet
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = FeatureSet::parse(&self.features);
        if self.use_swift_info {
            set.extend(swift_info_features);
        }
        set.exclude(&self.excluded_features);
        set
    }
}

/// Features a cluster is known to support.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureSet {
    All,
    None,
    Some(BTreeSet<String>),
}

impl Default for FeatureSet {
    fn default() -> Self {
        FeatureSet::Some(BTreeSet::new())
    }
}

impl FeatureSet {
    /// Parses a whitespace separated list; `__ALL__` or `__NONE__` anywhere wins over
    /// the named features.
    pub fn parse(features: &str) -> Self {
        let names: BTreeSet<String> = features.split_whitespace().map(str::to_string).collect();
        if names.contains(NO_FEATURES) {
            FeatureSet::None
        } else if names.contains(ALL_FEATURES) {
            FeatureSet::All
        } else {
            FeatureSet::Some(names)
        }
    }

    /// Adds features; no effect on `All` or `None`.
    pub fn extend<I, S>(&mut self, features: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let FeatureSet::Some(names) = self {
            names.extend(features.into_iter().map(Into::into));
        }
    }

    /// Removes whitespace separated features; no effect on `All` or `None`.
    pub fn exclude(&mut self, excluded: &str) {
        if let FeatureSet::Some(names) = self {
            for name in excluded.split_whitespace() {
                names.remove(name);
            }
        }
    }

    /// Returns true when every required feature is available.
    pub fn supports(&self, required: &[&str]) -> bool {
        match self {
            FeatureSet::All => true,
            FeatureSet::None => required.is_empty(),
            FeatureSet::Some(names) => required.iter().all(|r| names.contains(*r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ObjectStorageConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ObjectStorageConfig::from_lookup(
            |name| vars.get(name).cloned(),
            |name, default| vars.get(name).and_then(|v| v.parse().ok()).unwrap_or(default),
            |name, default| vars.get(name).and_then(|v| v.parse().ok()).unwrap_or(default),
        )
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.service_name, "cloudFiles");
        assert!(config.use_swift_info);
        assert_eq!(config.tempurl_key_cache_time, 0);
        assert_eq!(config.object_deletion_wait_interval, 70);
        assert_eq!(config.bulk_delete_max_count, 1000);
        assert_eq!(config.container_listing_limit, 10000);
        assert!(!config.ignore_cert_check);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SWIFT_STORAGE_URL", "http://127.0.0.1:8080/v1/AUTH_test"),
            ("SWIFT_USE_SWIFT_INFO", "false"),
            ("SWIFT_OBJECT_DELETION_WAIT_INTERVAL", "5"),
        ]);
        assert!(config.is_configured());
        assert!(!config.use_swift_info);
        assert_eq!(config.object_deletion_wait_interval, 5);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config_from(&[("SWIFT_AUTH_TOKEN", "tk"), ("SWIFT_API_KEY", "ak123")]);
        let printed = format!("{config:?}");
        assert!(!printed.contains("ak123"));
        assert!(printed.contains("*****"));
    }

    #[test]
    fn test_feature_set_merges_info_and_excludes() {
        let config = config_from(&[
            ("SWIFT_FEATURES", "tempurl formpost"),
            ("SWIFT_EXCLUDED_FEATURES", "formpost slo"),
        ]);
        let set = config.feature_set(["slo", "bulk_delete"]);
        assert!(set.supports(&["tempurl", "bulk_delete"]));
        assert!(!set.supports(&["formpost"]));
        assert!(!set.supports(&["slo"]));
    }

    #[test]
    fn test_feature_set_ignores_info_when_disabled() {
        let config = config_from(&[("SWIFT_USE_SWIFT_INFO", "false")]);
        let set = config.feature_set(["tempurl"]);
        assert!(!set.supports(&["tempurl"]));
        assert!(set.supports(&[]));
    }

    #[test]
    fn test_feature_set_special_values() {
        assert!(FeatureSet::parse("__ALL__").supports(&["anything"]));
        assert!(!FeatureSet::parse("tempurl __NONE__").supports(&["tempurl"]));
        assert!(FeatureSet::parse("__NONE__").supports(&[]));
    }
}
