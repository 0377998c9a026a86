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
use snappy::swift::error::{Error, ValidationErr};
use snappy::swift::response::a_response_traits::{
    HasContainer, HasEtag, HasMetadata, HasObject, HasSwiftFields,
};
use snappy::swift::types::SwiftApi;
use snappy::swift::utils::md5_hash;
use snappy_common::test_context::TestContext;
use snappy_common::utils::{rand_container_name, rand_object_name};
use std::collections::HashMap;

#[snappy_macros::test(no_container)]
async fn container_lifecycle(ctx: TestContext) {
    let container = rand_container_name(&ctx.config.base_container_name);

    let resp = ctx.client.create_container(&container).build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.container(), container);

    let resp = ctx.client.create_container(&container).build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    let resp = ctx
        .client
        .set_container_metadata(&container)
        .metadata(HashMap::from([("color".to_string(), "blue".to_string())]))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .get_container_metadata(&container)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.object_count(), Some(0));
    assert_eq!(resp.metadata().get("color").map(String::as_str), Some("blue"));

    let resp = ctx.client.delete_container(&container).build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .get_container_metadata(&container)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[snappy_macros::test]
async fn object_roundtrip(ctx: TestContext, container: String) {
    let object = rand_object_name();
    let data = "hello, world";

    let resp = ctx
        .client
        .create_object(&container, &object, data)
        .content_type("text/plain")
        .metadata(HashMap::from([("owner".to_string(), "qe".to_string())]))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.object(), object);
    assert_eq!(resp.etag(), Some(md5_hash(data.as_bytes()).as_str()));

    let resp = ctx
        .client
        .get_object_metadata(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content_length(), Some(data.len() as u64));
    assert_eq!(resp.metadata().get("owner").map(String::as_str), Some("qe"));

    let resp = ctx
        .client
        .get_object(&container, &object)
        .offset(7)
        .length(5)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(resp.content().as_ref(), b"world");

    let resp = ctx
        .client
        .delete_object(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx
        .client
        .delete_object(&container, &object)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[snappy_macros::test]
async fn copy_object_both_ways(ctx: TestContext, container: String) {
    ctx.create_objects(&container, &["src"]).await;

    let resp = ctx
        .client
        .copy_object(&container, "by-put")
        .copy_from(format!("{container}/src"))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = ctx
        .client
        .copy_object(&container, "src")
        .destination(format!("{container}/by-copy"))
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    for name in ["by-put", "by-copy"] {
        let resp = ctx
            .client
            .get_object(&container, name)
            .build()
            .send()
            .await
            .unwrap();
        assert_eq!(resp.content().as_ref(), b"src", "{name}");
    }
}

#[snappy_macros::test]
async fn copy_object_requires_source(ctx: TestContext, container: String) {
    let err = ctx
        .client
        .copy_object(&container, "dst")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::MissingCopySource)
    ));
}

async fn object_counts(ctx: &TestContext, container: &str) -> (Option<u64>, Option<u64>) {
    let listed = ctx.client.list_objects(container).build().send().await.unwrap();
    let head = ctx
        .client
        .get_container_metadata(container)
        .build()
        .send()
        .await
        .unwrap();
    (listed.object_count(), head.object_count())
}

#[snappy_macros::test]
async fn object_count_follows_updates(ctx: TestContext, container: String) {
    let names = ["a_obj", "b_obj", "c_obj", "d_obj", "e_obj", "f_obj"];
    ctx.create_objects(&container, &names).await;
    assert_eq!(object_counts(&ctx, &container).await, (Some(6), Some(6)));

    let resp = ctx
        .client
        .delete_object(&container, names[0])
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(object_counts(&ctx, &container).await, (Some(5), Some(5)));
}

#[snappy_macros::test(no_container)]
async fn account_metadata_and_info(ctx: TestContext) {
    let resp = ctx.client.get_account_metadata().build().send().await.unwrap();
    assert!(resp.status().is_success());
    assert!(resp.container_count().is_some());

    let resp = ctx.client.get_swift_info().build().send().await.unwrap();
    if ctx.config.use_swift_info {
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.entity().unwrap().has_feature("swift"));
    }
}

#[snappy_macros::test(no_container)]
async fn health_check(ctx: TestContext) {
    let resp = ctx.client.health_check().build().send().await.unwrap();
    assert!(resp.is_healthy(), "status {}", resp.status());
}
