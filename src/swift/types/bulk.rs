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

//! Summaries returned by the bulk middleware
//!
//! Both `?bulk-delete` and `?extract-archive` answer with a JSON document when the
//! request carries `Accept: application/json`.

use serde::Deserialize;

/// One `[name, status]` pair of the `Errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BulkError(pub String, pub String);

impl BulkError {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn status(&self) -> &str {
        &self.1
    }
}

/// Body of a bulk delete response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BulkDeleteResult {
    #[serde(default, rename = "Number Deleted")]
    pub number_deleted: u64,
    #[serde(default, rename = "Number Not Found")]
    pub number_not_found: u64,
    #[serde(default, rename = "Errors")]
    pub errors: Vec<BulkError>,
    #[serde(default, rename = "Response Status")]
    pub response_status: String,
    #[serde(default, rename = "Response Body")]
    pub response_body: String,
}

/// Body of an archive auto-extraction response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractArchiveResult {
    #[serde(default, rename = "Number Files Created")]
    pub number_files_created: u64,
    #[serde(default, rename = "Errors")]
    pub errors: Vec<BulkError>,
    #[serde(default, rename = "Response Status")]
    pub response_status: String,
    #[serde(default, rename = "Response Body")]
    pub response_body: String,
}

/// Returns the numeric code of a `Response Status` such as `"200 OK"`.
pub fn status_code(response_status: &str) -> Option<u16> {
    response_status.split_whitespace().next()?.parse().ok()
}

impl BulkDeleteResult {
    pub fn status_code(&self) -> Option<u16> {
        status_code(&self.response_status)
    }
}

impl ExtractArchiveResult {
    pub fn status_code(&self) -> Option<u16> {
        status_code(&self.response_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_delete_result() {
        let body = r#"{"Number Not Found": 1, "Response Status": "200 OK",
            "Response Body": "", "Errors": [], "Number Deleted": 3}"#;
        let result: BulkDeleteResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.number_deleted, 3);
        assert_eq!(result.number_not_found, 1);
        assert!(result.errors.is_empty());
        assert_eq!(result.status_code(), Some(200));
    }

    #[test]
    fn test_extract_archive_result_with_errors() {
        let body = r#"{"Number Files Created": 0, "Response Status": "400 Bad Request",
            "Response Body": "Invalid Tar File", "Errors": [["/c/o", "412 Precondition Failed"]]}"#;
        let result: ExtractArchiveResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.number_files_created, 0);
        assert_eq!(result.status_code(), Some(400));
        assert_eq!(result.errors[0].name(), "/c/o");
        assert_eq!(result.errors[0].status(), "412 Precondition Failed");
    }
}
