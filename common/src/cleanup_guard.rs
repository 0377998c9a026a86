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

use snappy::swift::SwiftClient;
use snappy::swift::deserializer::Format;
use snappy::swift::error::Error;
use snappy::swift::types::SwiftApi;

pub struct CleanupGuard {
    client: SwiftClient,
    container: String,
}

impl CleanupGuard {
    #[allow(dead_code)]
    pub fn new<S: Into<String>>(client: SwiftClient, container: S) -> Self {
        Self {
            client,
            container: container.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.client.clone(), &self.container).await;
    }
}

/// Deletes every object of `container`, then the container itself.
pub async fn cleanup(client: SwiftClient, container: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing container {container}");
        },
        outcome = purge_container(&client, container) => {
            if let Err(e) = outcome {
                eprintln!("Error removing container '{container}':\n{e}");
            }
        }
    );
}

async fn purge_container(client: &SwiftClient, container: &str) -> Result<(), Error> {
    let mut marker: Option<String> = None;
    loop {
        let req = client.list_objects(container).format(Format::Json);
        let resp = match marker.take() {
            Some(m) => req.marker(m).build().send().await?,
            None => req.build().send().await?,
        };
        let names: Vec<String> = resp.names().into_iter().map(str::to_string).collect();
        if names.is_empty() {
            break;
        }
        for name in &names {
            let _ = client.delete_object(container, name).build().send().await?;
        }
        marker = names.last().cloned();
    }
    let _ = client.delete_container(container).build().send().await?;
    Ok(())
}
