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

//! Swift client to perform account, container and object operations.
//!
//! Every request carries the `X-Auth-Token` of the configured [`Provider`]. Any HTTP
//! status returned by the cluster is handed to the typed response; only transport
//! failures are errors.

use bytes::Bytes;
use http::Method;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::swift::creds::Provider;
use crate::swift::error::{Error, IoError, NetworkError, ValidationErr};
use crate::swift::header_constants::*;
use crate::swift::http::{StorageUrl, Url};
use crate::swift::multimap_ext::{Multimap, MultimapExt, merge_headers};
use crate::swift::signer::{DigestAlgorithm, SignatureRequest, SignedUrl, TtlSeconds};
use crate::swift::types::swift_request::Endpoint;

mod bulk_delete;
mod copy_object;
mod create_container;
mod create_object;
mod delete_container;
mod delete_object;
mod extract_archive;
mod get_account_metadata;
mod get_container_metadata;
mod get_container_options;
mod get_object;
mod get_object_metadata;
mod get_swift_info;
mod health_check;
mod list_containers;
mod list_objects;
mod set_container_metadata;
mod set_object_metadata;
mod set_temp_url_key;

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct SwiftClientBuilder {
    storage_url: StorageUrl,
    /// Set the token provider. If not set, requests are sent without `X-Auth-Token`.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
}

impl SwiftClientBuilder {
    /// Creates a builder given the storage URL of a Swift account.
    pub fn new(storage_url: StorageUrl) -> Self {
        Self {
            storage_url,
            provider: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
        }
    }

    /// Set the token provider. If not set, requests are sent without `X-Auth-Token`.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<SwiftClient, Error> {
        let mut builder = reqwest::Client::builder().no_gzip();

        let mut user_agent = String::from("Snappy (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") snappy-rs/"
            + env!("CARGO_PKG_VERSION");

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(NetworkError::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(SwiftClient {
            http_client: builder.build().map_err(NetworkError::from)?,
            shared: Arc::new(SharedClientItems {
                storage_url: self.storage_url,
                provider: self.provider,
            }),
        })
    }
}

/// Swift client to perform account, container and object operations.
#[derive(Clone, Debug)]
pub struct SwiftClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl SwiftClient {
    /// Returns a Swift client for the given storage URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use snappy::swift::SwiftClient;
    /// use snappy::swift::creds::StaticProvider;
    /// use snappy::swift::http::StorageUrl;
    ///
    /// let storage_url: StorageUrl = "https://storage.example.com/v1/AUTH_1234".parse().unwrap();
    /// let client = SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap();
    /// assert_eq!(client.account(), "AUTH_1234");
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        storage_url: StorageUrl,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        SwiftClientBuilder::new(storage_url).provider(provider).build()
    }

    /// Returns the storage URL this client talks to.
    pub fn storage_url(&self) -> &StorageUrl {
        &self.shared.storage_url
    }

    /// Returns the account segment of the storage URL.
    pub fn account(&self) -> &str {
        self.shared.storage_url.account()
    }

    /// Returns whether this client is configured to use HTTPS.
    pub fn is_secure(&self) -> bool {
        self.shared.storage_url.is_secure()
    }

    /// Signs a TempURL for `method` on `container/object` against this client's account.
    ///
    /// Nothing is sent; the caller uses the returned [`SignedUrl`] with
    /// [`SwiftClient::execute_url`] or any other HTTP client.
    pub fn create_temp_url(
        &self,
        method: &str,
        container: &str,
        object: &str,
        ttl_seconds: impl Into<TtlSeconds>,
        secret_key: &[u8],
        digest_algorithm: DigestAlgorithm,
    ) -> Result<SignedUrl, ValidationErr> {
        SignatureRequest::builder()
            .method(method)
            .container(container)
            .object(object)
            .ttl_seconds(ttl_seconds)
            .secret_key(secret_key)
            .digest_algorithm(digest_algorithm)
            .build()
            .sign(&self.shared.storage_url)
    }

    fn endpoint_url(
        &self,
        endpoint: Endpoint,
        query_params: &Multimap,
        container: Option<&str>,
        object: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let storage_url = &self.shared.storage_url;
        match endpoint {
            Endpoint::Storage => storage_url.build_url(query_params, container, object),
            Endpoint::Info => Ok(storage_url.info_url(query_params)),
            Endpoint::HealthCheck => Ok(storage_url.health_check_url(query_params)),
        }
    }

    fn default_headers(&self) -> Multimap {
        let mut headers = Multimap::new();
        if let Some(p) = &self.shared.provider {
            headers.add(X_AUTH_TOKEN, p.fetch().auth_token);
        }
        headers
    }

    async fn send_request(
        &self,
        method: Method,
        url: &str,
        headers: &Multimap,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let mut req = self.http_client.request(method.clone(), url);

        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        match body {
            Some(b) => req = req.body(b),
            None if method == Method::PUT || method == Method::POST => {
                req = req.body(Bytes::new());
            }
            None => {}
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        log::debug!(
            "{} {} -> {} (trans id {})",
            method,
            url.split('?').next().unwrap_or_default(),
            resp.status(),
            resp.headers()
                .get(X_TRANS_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
        );
        Ok(resp)
    }

    pub(crate) async fn execute(
        &self,
        method: Method,
        endpoint: Endpoint,
        headers: &Multimap,
        query_params: &Multimap,
        container: Option<&str>,
        object: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self.endpoint_url(endpoint, query_params, container, object)?;
        let headers = merge_headers(&self.default_headers(), headers.clone());
        self.send_request(method, &url.to_string(), &headers, body)
            .await
    }

    /// Sends a request to an absolute URL without `X-Auth-Token`.
    ///
    /// Used for TempURL requests, where the query string is the credential.
    pub async fn execute_url(
        &self,
        method: Method,
        url: &str,
        headers: &Multimap,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        self.send_request(method, url, headers, body).await
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) storage_url: StorageUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}
