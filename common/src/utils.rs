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

use http::{Response as HttpResponse, StatusCode};
use rand::distr::{Alphanumeric, SampleString};

/// Returns a random container name, prefixed with `prefix` when not empty.
pub fn rand_container_name(prefix: &str) -> String {
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), 12).to_lowercase();
    if prefix.is_empty() {
        format!("snappy-{suffix}")
    } else {
        format!("{prefix}-{suffix}")
    }
}

pub fn rand_object_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}

/// Returns `count` random object names sharing `prefix`, sorted the way listings are.
pub fn rand_object_names(prefix: &str, count: usize) -> Vec<String> {
    let mut names: Vec<String> = (0..count)
        .map(|_| format!("{prefix}{}", rand_object_name()))
        .collect();
    names.sort();
    names.dedup();
    names
}

pub fn get_response_from_bytes(bytes: bytes::Bytes) -> reqwest::Response {
    let http_response = HttpResponse::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/octet-stream")
        .body(bytes)
        .expect("Failed to build HTTP response");

    reqwest::Response::from(http_response)
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
