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

use http::StatusCode;
use snappy::swift::builders::ObjectExpiry;
use snappy::swift::response::a_response_traits::HasSwiftFields;
use snappy::swift::types::SwiftApi;
use snappy_common::test_context::TestContext;
use snappy_common::utils::{rand_object_name, unix_now};
use std::time::Duration;

#[snappy_macros::test]
async fn object_expires_after(ctx: TestContext, container: String) {
    let object = rand_object_name();
    let resp = ctx
        .client
        .create_object(&container, &object, "short lived")
        .expiry(ObjectExpiry::After(2))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ctx
        .client
        .get_object_metadata(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let delete_at = resp.delete_at().unwrap();
    assert!(delete_at > unix_now() - 5 && delete_at <= unix_now() + 5);

    tokio::time::sleep(Duration::from_secs(4)).await;
    let resp = ctx
        .client
        .get_object(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[snappy_macros::test]
async fn object_expires_at(ctx: TestContext, container: String) {
    let object = rand_object_name();
    let delete_at = unix_now() + 3600;
    ctx.client
        .create_object(&container, &object, "kept for an hour")
        .expiry(ObjectExpiry::At(delete_at))
        .build()
        .send()
        .await
        .unwrap();

    let resp = ctx
        .client
        .get_object_metadata(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.delete_at(), Some(delete_at));

    // Moving the expiry into the past is refused.
    let resp = ctx
        .client
        .set_object_metadata(&container, &object)
        .expiry(ObjectExpiry::At(unix_now() - 3600))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[snappy_macros::test]
async fn expiry_set_by_post(ctx: TestContext, container: String) {
    let object = rand_object_name();
    ctx.create_objects(&container, &[object.as_str()]).await;

    let resp = ctx
        .client
        .set_object_metadata(&container, &object)
        .expiry(ObjectExpiry::After(3600))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = ctx
        .client
        .get_object_metadata(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    let delete_at = resp.delete_at().unwrap();
    assert!(delete_at > unix_now() + 3500);
}
