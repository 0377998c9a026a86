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

//! Core Swift types and trait definitions

pub mod bulk;
pub mod info;
pub mod listing;
pub mod swift_request;
pub mod traits;

pub use bulk::{BulkDeleteResult, ExtractArchiveResult};
pub use info::SwiftInfo;
pub use listing::{Container, ListingEntry, ListingRecord, StorageObject};
pub use swift_request::SwiftRequest;
pub use traits::{FromSwiftResponse, SwiftApi, ToSwiftRequest};
