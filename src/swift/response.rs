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

//! Responses for the storage API calls

pub mod a_response_traits;

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

#[cfg(test)]
mod response_tests;

pub use bulk_delete::BulkDeleteResponse;
pub use copy_object::CopyObjectResponse;
pub use create_container::CreateContainerResponse;
pub use create_object::CreateObjectResponse;
pub use delete_container::DeleteContainerResponse;
pub use delete_object::DeleteObjectResponse;
pub use extract_archive::ExtractArchiveResponse;
pub use get_account_metadata::GetAccountMetadataResponse;
pub use get_container_metadata::GetContainerMetadataResponse;
pub use get_container_options::GetContainerOptionsResponse;
pub use get_object::GetObjectResponse;
pub use get_object_metadata::GetObjectMetadataResponse;
pub use get_swift_info::GetSwiftInfoResponse;
pub use health_check::HealthCheckResponse;
pub use list_containers::ListContainersResponse;
pub use list_objects::ListObjectsResponse;
pub use set_container_metadata::SetContainerMetadataResponse;
pub use set_object_metadata::SetObjectMetadataResponse;
pub use set_temp_url_key::SetTempUrlKeyResponse;
