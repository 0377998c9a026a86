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

pub const IF_MATCH: &str = "If-Match";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const RANGE: &str = "Range";
pub const ETAG: &str = "ETag";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const DESTINATION: &str = "Destination";

pub const X_AUTH_TOKEN: &str = "X-Auth-Token";

pub const X_COPY_FROM: &str = "X-Copy-From";
pub const X_DELETE_AT: &str = "X-Delete-At";
pub const X_DELETE_AFTER: &str = "X-Delete-After";
pub const X_OBJECT_MANIFEST: &str = "X-Object-Manifest";

pub const X_ACCOUNT_META_PREFIX: &str = "X-Account-Meta-";
pub const X_CONTAINER_META_PREFIX: &str = "X-Container-Meta-";
pub const X_OBJECT_META_PREFIX: &str = "X-Object-Meta-";

pub const ORIGIN: &str = "Origin";
pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";
pub const ALLOW: &str = "allow";

pub const X_ACCOUNT_META_TEMP_URL_KEY: &str = "X-Account-Meta-Temp-URL-Key";
pub const X_ACCOUNT_META_TEMP_URL_KEY_2: &str = "X-Account-Meta-Temp-URL-Key-2";
pub const X_CONTAINER_META_TEMP_URL_KEY: &str = "X-Container-Meta-Temp-URL-Key";
pub const X_CONTAINER_META_TEMP_URL_KEY_2: &str = "X-Container-Meta-Temp-URL-Key-2";

pub const X_ACCOUNT_CONTAINER_COUNT: &str = "x-account-container-count";
pub const X_ACCOUNT_OBJECT_COUNT: &str = "x-account-object-count";
pub const X_ACCOUNT_BYTES_USED: &str = "x-account-bytes-used";
pub const X_CONTAINER_OBJECT_COUNT: &str = "x-container-object-count";
pub const X_CONTAINER_BYTES_USED: &str = "x-container-bytes-used";
pub const X_TRANS_ID: &str = "x-trans-id";

pub const TEMP_URL_SIG: &str = "temp_url_sig";
pub const TEMP_URL_EXPIRES: &str = "temp_url_expires";
pub const FILENAME: &str = "filename";
pub const INLINE: &str = "inline";

pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_XML: &str = "application/xml";
