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
use snappy::swift::deserializer::Format;
use snappy::swift::response::a_response_traits::{HasContentType, HasSwiftFields};
use snappy::swift::types::SwiftApi;
use snappy_common::test_context::TestContext;
use snappy_common::utils::rand_object_names;

async fn list_names(ctx: &TestContext, container: &str, format: Option<Format>) -> Vec<String> {
    let resp = match format {
        Some(f) => ctx.client.list_objects(container).format(f).build(),
        None => ctx.client.list_objects(container).build(),
    }
    .send()
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.names().into_iter().map(str::to_string).collect()
}

#[snappy_macros::test]
async fn list_objects_all_formats(ctx: TestContext, container: String) {
    let names = rand_object_names("obj-", 5);
    ctx.create_objects(&container, &names).await;

    for format in [None, Some(Format::Text), Some(Format::Json), Some(Format::Xml)] {
        assert_eq!(list_names(&ctx, &container, format).await, names, "{format:?}");
    }
}

#[snappy_macros::test]
async fn list_objects_content_type(ctx: TestContext, container: String) {
    ctx.create_objects(&container, &["a"]).await;

    for (format, expected) in [
        (Format::Text, "text/plain"),
        (Format::Json, "application/json"),
        (Format::Xml, "application/xml"),
    ] {
        let resp = ctx
            .client
            .list_objects(&container)
            .format(format)
            .build()
            .send()
            .await
            .unwrap();
        let content_type = resp.content_type().unwrap_or_default();
        assert!(content_type.starts_with(expected), "{content_type}");
        assert_eq!(Format::from_content_type(content_type), Some(format));
    }
}

#[snappy_macros::test]
async fn list_objects_json_details(ctx: TestContext, container: String) {
    ctx.create_objects(&container, &["hello"]).await;

    let resp = ctx
        .client
        .list_objects(&container)
        .format(Format::Json)
        .build()
        .send()
        .await
        .unwrap();
    let objects = resp.entity().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].name, "hello");
    assert_eq!(objects[0].byte_count, Some(5));
    assert_eq!(
        objects[0].content_hash.as_deref(),
        Some("5d41402abc4b2a76b9719d911017c592")
    );
}

#[snappy_macros::test]
async fn list_empty_container(ctx: TestContext, container: String) {
    let resp = ctx
        .client
        .list_objects(&container)
        .format(Format::Json)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.entity().map(<[_]>::len), Some(0));

    // An empty plain text listing is answered with 204 and no body.
    let resp = ctx.client.list_objects(&container).build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.entity().is_none());
}

#[snappy_macros::test]
async fn list_containers_all_formats(ctx: TestContext, container: String) {
    for format in [Format::Text, Format::Json, Format::Xml] {
        let resp = ctx
            .client
            .list_containers()
            .prefix(container.clone())
            .format(format)
            .build()
            .send()
            .await
            .unwrap();
        let names: Vec<&str> = resp
            .entity()
            .unwrap_or_default()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec![container.as_str()], "{format}");
    }
}
