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

//! Cluster capabilities published at `/info`

use serde_json::{Map, Value};

/// Capabilities document of a Swift cluster.
///
/// Top level keys name the enabled middleware (`tempurl`, `bulk_delete`, `slo`, ...);
/// their values hold middleware specific settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwiftInfo {
    sections: Map<String, Value>,
}

impl SwiftInfo {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self { sections }
    }

    /// Returns the names of the published sections.
    pub fn features(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    pub fn has_feature(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the settings of one section.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    /// Returns the digests accepted for TempURL signatures, when published.
    pub fn tempurl_digests(&self) -> Vec<String> {
        self.section("tempurl")
            .and_then(|v| v.get("allowed_digests"))
            .and_then(Value::as_array)
            .map(|a| {
                a.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns `max_deletes_per_request` of the bulk delete middleware, when published.
    pub fn max_deletes_per_request(&self) -> Option<u64> {
        self.section("bulk_delete")
            .and_then(|v| v.get("max_deletes_per_request"))
            .and_then(Value::as_u64)
    }

    /// Returns `container_listing_limit` of the core `swift` section, when published.
    pub fn container_listing_limit(&self) -> Option<u64> {
        self.section("swift")
            .and_then(|v| v.get("container_listing_limit"))
            .and_then(Value::as_u64)
    }
}
