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

//! Argument builders for [SwiftClient](crate::swift::client::SwiftClient) APIs

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

pub use bulk_delete::*;
pub use copy_object::*;
pub use create_container::*;
pub use create_object::*;
pub use delete_container::*;
pub use delete_object::*;
pub use extract_archive::*;
pub use get_account_metadata::*;
pub use get_container_metadata::*;
pub use get_container_options::*;
pub use get_object::*;
pub use get_object_metadata::*;
pub use get_swift_info::*;
pub use health_check::*;
pub use list_containers::*;
pub use list_objects::*;
pub use set_container_metadata::*;
pub use set_object_metadata::*;
pub use set_temp_url_key::*;
