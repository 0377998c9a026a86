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

//! Token authentication against an identity service
//!
//! Only the api-key flavour of identity v2 (`RAX-KSKEY:apiKeyCredentials`) is
//! supported. The response carries the token and a service catalog from which the
//! storage URL of the account is picked.

use crate::swift::error::{AuthError, Error, NetworkError};
use crate::swift::header_constants::{ACCEPT, CONTENT_TYPE, CONTENT_TYPE_JSON};
use serde::Deserialize;
use serde_json::json;

const TOKENS_PATH: &str = "/v2.0/tokens";

#[derive(Clone, Debug, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(default)]
    pub expires: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "publicURL")]
    pub public_url: String,
    #[serde(default, rename = "internalURL")]
    pub internal_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default, rename = "type")]
    pub service_type: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Clone, Debug, Deserialize)]
struct Access {
    token: Token,
    #[serde(default, rename = "serviceCatalog")]
    service_catalog: Vec<Service>,
}

/// Successful answer of the identity service.
#[derive(Clone, Deserialize)]
pub struct AuthResponse {
    access: Access,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"*****")
            .field("service_catalog", &self.access.service_catalog)
            .finish()
    }
}

impl AuthResponse {
    /// Returns the token to send as `X-Auth-Token`.
    pub fn token(&self) -> &str {
        &self.access.token.id
    }

    pub fn service_catalog(&self) -> &[Service] {
        &self.access.service_catalog
    }

    /// Returns the public URL of `service_name` in `region`, or of its first endpoint
    /// when no region is given.
    pub fn storage_url(
        &self,
        service_name: &str,
        region: Option<&str>,
    ) -> Result<String, AuthError> {
        let service = self
            .access
            .service_catalog
            .iter()
            .find(|s| s.name == service_name)
            .ok_or_else(|| AuthError::ServiceNotFound(service_name.to_string()))?;

        let endpoint = match region {
            Some(r) => service
                .endpoints
                .iter()
                .find(|e| e.region.as_deref() == Some(r)),
            None => service.endpoints.first(),
        };
        endpoint
            .map(|e| e.public_url.clone())
            .ok_or_else(|| AuthError::RegionNotFound {
                service: service_name.to_string(),
                region: region.unwrap_or_default().to_string(),
            })
    }
}

/// Returns the tokens URL for an identity endpoint given with or without its path.
pub fn tokens_url(endpoint: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.ends_with("/tokens") {
        endpoint.to_string()
    } else if endpoint.ends_with("/v2.0") {
        format!("{endpoint}/tokens")
    } else {
        format!("{endpoint}{TOKENS_PATH}")
    }
}

/// Authenticates `username` with `api_key` using a default HTTP client.
pub async fn authenticate(
    endpoint: &str,
    username: &str,
    api_key: &str,
) -> Result<AuthResponse, Error> {
    let http_client = reqwest::Client::new();
    authenticate_with(&http_client, endpoint, username, api_key).await
}

/// Authenticates `username` with `api_key` using the given HTTP client.
pub async fn authenticate_with(
    http_client: &reqwest::Client,
    endpoint: &str,
    username: &str,
    api_key: &str,
) -> Result<AuthResponse, Error> {
    let url = tokens_url(endpoint);
    let body = json!({
        "auth": {
            "RAX-KSKEY:apiKeyCredentials": {
                "username": username,
                "apiKey": api_key,
            }
        }
    });

    log::debug!("authenticating '{username}' against {url}");
    let resp = http_client
        .post(&url)
        .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
        .header(ACCEPT, CONTENT_TYPE_JSON)
        .body(body.to_string())
        .send()
        .await
        .map_err(NetworkError::from)?;

    let status = resp.status();
    let text = resp.text().await.map_err(NetworkError::from)?;
    if !status.is_success() {
        log::error!("identity service rejected '{username}' with status {status}");
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            body: text,
        }
        .into());
    }

    serde_json::from_str::<AuthResponse>(&text)
        .map_err(AuthError::from)
        .map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{"access": {
        "token": {"id": "tk-123", "expires": "2030-01-01T00:00:00Z"},
        "serviceCatalog": [
            {"name": "cloudServers", "type": "compute", "endpoints": []},
            {"name": "cloudFiles", "type": "object-store", "endpoints": [
                {"region": "DFW", "publicURL": "https://dfw.example.com/v1/AUTH_1"},
                {"region": "ORD", "publicURL": "https://ord.example.com/v1/AUTH_1"}
            ]}
        ]
    }}"#;

    #[test]
    fn test_storage_url_by_region() {
        let resp: AuthResponse = serde_json::from_str(RESPONSE).unwrap();
        assert_eq!(resp.token(), "tk-123");
        assert_eq!(
            resp.storage_url("cloudFiles", Some("ORD")).unwrap(),
            "https://ord.example.com/v1/AUTH_1"
        );
        assert_eq!(
            resp.storage_url("cloudFiles", None).unwrap(),
            "https://dfw.example.com/v1/AUTH_1"
        );
    }

    #[test]
    fn test_storage_url_missing() {
        let resp: AuthResponse = serde_json::from_str(RESPONSE).unwrap();
        assert!(matches!(
            resp.storage_url("swift", None),
            Err(AuthError::ServiceNotFound(_))
        ));
        assert!(matches!(
            resp.storage_url("cloudFiles", Some("SYD")),
            Err(AuthError::RegionNotFound { .. })
        ));
        assert!(matches!(
            resp.storage_url("cloudServers", None),
            Err(AuthError::RegionNotFound { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let resp: AuthResponse = serde_json::from_str(RESPONSE).unwrap();
        assert!(!format!("{resp:?}").contains("tk-123"));
    }

    #[test]
    fn test_tokens_url() {
        assert_eq!(
            tokens_url("https://identity.example.com"),
            "https://identity.example.com/v2.0/tokens"
        );
        assert_eq!(
            tokens_url("https://identity.example.com/v2.0/"),
            "https://identity.example.com/v2.0/tokens"
        );
        assert_eq!(
            tokens_url("https://identity.example.com/v2.0/tokens"),
            "https://identity.example.com/v2.0/tokens"
        );
    }
}
