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

use crate::swift::error::ValidationErr;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::urlencode_object_key;
use std::fmt;
use std::str::FromStr;

/// Path segment separating the Swift endpoint from the account in a storage URL.
pub const API_VERSION_DELIMITER: &str = "/v1/";

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug)]
/// Represents the storage URL of a Swift account, e.g.
/// `https://storage.example.com/v1/AUTH_1234`.
///
/// Parsing fails when the URL does not contain the `/v1/` delimiter followed by an
/// account segment; such an endpoint cannot be used to address objects or to sign
/// TempURLs.
pub struct StorageUrl {
    raw: String,
    https: bool,
    host: String,
    port: u16,
    path: String,
    account: String,
}

impl FromStr for StorageUrl {
    type Err = ValidationErr;

    /// Convert a string to a StorageUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use snappy::swift::http::StorageUrl;
    ///
    /// let storage_url: StorageUrl = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    /// assert_eq!(storage_url.account(), "AUTH_1234");
    /// assert_eq!(storage_url.swift_endpoint(), "https://storage.example.com");
    ///
    /// assert!("https://storage.example.com/AUTH_1234".parse::<StorageUrl>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let invalid = |reason: &str| ValidationErr::InvalidStorageUrl {
            url: s.to_string(),
            reason: reason.to_string(),
        };

        let raw = s.trim_end_matches('/');
        let parsed = url::Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

        let https = match parsed.scheme() {
            "http" => false,
            "https" => true,
            _ => return Err(invalid("scheme must be http or https")),
        };

        let host = parsed
            .host_str()
            .ok_or_else(|| invalid("valid host must be provided"))?
            .to_string();

        let port = match parsed.port() {
            Some(p) => p,
            None => 0u16,
        };

        if parsed.query().is_some() {
            return Err(invalid("query must be none for storage URL"));
        }

        let (_, rest) = raw
            .split_once(API_VERSION_DELIMITER)
            .ok_or_else(|| invalid("missing '/v1/' delimiter"))?;
        let account = rest.split('/').next().unwrap_or_default();
        if account.is_empty() {
            return Err(invalid("account must follow '/v1/'"));
        }

        Ok(StorageUrl {
            raw: raw.to_string(),
            https,
            host,
            port,
            path: parsed.path().trim_end_matches('/').to_string(),
            account: account.to_string(),
        })
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl StorageUrl {
    /// Returns the storage URL as given, without a trailing slash.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the storage URL uses HTTPS.
    pub fn is_secure(&self) -> bool {
        self.https
    }

    /// Returns the account segment following `/v1/`.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Returns everything before `/v1/`, i.e. the Swift proxy endpoint.
    pub fn swift_endpoint(&self) -> &str {
        match self.raw.split_once(API_VERSION_DELIMITER) {
            Some((endpoint, _)) => endpoint,
            None => &self.raw,
        }
    }

    /// Returns the absolute resource path `/v1/<account>/<container>/<object>` signed by
    /// TempURL. Names are used verbatim.
    pub fn object_path(&self, container: &str, object: &str) -> String {
        format!("/v1/{}/{}/{}", self.account, container, object)
    }

    /// Returns the full, unsigned URL of an object. Names are used verbatim.
    pub fn target_url(&self, container: &str, object: &str) -> String {
        format!("{}/{}/{}", self.raw, container, object)
    }

    fn url_with_path(&self, path: String, query: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query.clone(),
        }
    }

    /// Builds the URL of an account, container or object resource.
    pub fn build_url(
        &self,
        query: &Multimap,
        container_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut path = self.path.clone();

        if let Some(c) = container_name {
            path.push('/');
            path.push_str(&urlencode_object_key(c));
        }

        if let Some(o) = object_name {
            if container_name.is_none() {
                return Err(ValidationErr::UrlBuildError(format!(
                    "object '{o}' requires a container"
                )));
            }
            path.push('/');
            path.push_str(&urlencode_object_key(o));
        }

        Ok(self.url_with_path(path, query))
    }

    /// Builds the URL of the cluster capabilities document, `<swift_endpoint>/info`.
    pub fn info_url(&self, query: &Multimap) -> Url {
        let prefix = match self.path.split_once(API_VERSION_DELIMITER.trim_end_matches('/')) {
            Some((prefix, _)) => prefix.to_string(),
            None => String::new(),
        };
        self.url_with_path(format!("{prefix}/info"), query)
    }

    /// Builds the URL of the proxy health check, `<scheme>://<host>/healthcheck`.
    pub fn health_check_url(&self, query: &Multimap) -> Url {
        self.url_with_path(String::from("/healthcheck"), query)
    }
}
