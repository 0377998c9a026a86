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
use snappy::swift::archive::{Compression, create_archive};
use snappy::swift::deserializer::Format;
use snappy::swift::response::a_response_traits::HasSwiftFields;
use snappy::swift::types::SwiftApi;
use snappy::swift::utils::md5_hash;
use snappy_common::test_context::TestContext;
use snappy_common::utils::rand_object_names;

#[snappy_macros::test(features = "bulk_delete")]
async fn bulk_delete_objects(ctx: TestContext, container: String) {
    let names = rand_object_names("bulk ", 5);
    ctx.create_objects(&container, &names).await;

    let mut targets: Vec<String> = names.iter().map(|n| format!("{container}/{n}")).collect();
    targets.push(format!("{container}/does-not-exist"));
    let resp = ctx.client.bulk_delete(targets).build().send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result = resp.entity().unwrap();
    assert_eq!(result.number_deleted, names.len() as u64);
    assert_eq!(result.number_not_found, 1);
    assert!(result.errors.is_empty());
    assert_eq!(result.status_code(), Some(200));

    let resp = ctx
        .client
        .list_objects(&container)
        .format(Format::Json)
        .build()
        .send()
        .await
        .unwrap();
    assert!(resp.names().is_empty());
}

#[snappy_macros::test(features = "bulk_delete")]
async fn bulk_delete_non_empty_container(ctx: TestContext, container: String) {
    ctx.create_objects(&container, &["keep"]).await;

    let resp = ctx
        .client
        .bulk_delete([container.as_str()])
        .build()
        .send()
        .await
        .unwrap();
    let result = resp.entity().unwrap();
    assert_eq!(result.number_deleted, 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].status(), "409 Conflict");
}

async fn extract(ctx: &TestContext, container: &str, compression: Compression) {
    let names = ["a", "b", "dir/c"];
    let archive = create_archive(&names, compression).unwrap();
    let resp = ctx
        .client
        .extract_archive(container, archive)
        .compression(compression)
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result = resp.entity().unwrap();
    assert_eq!(result.number_files_created, names.len() as u64);
    assert!(result.errors.is_empty());

    let resp = ctx
        .client
        .get_object(container, "dir/c")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.content().as_ref(), md5_hash(b"dir/c").as_bytes());
}

#[snappy_macros::test(features = "bulk_upload")]
async fn extract_tar(ctx: TestContext, container: String) {
    extract(&ctx, &container, Compression::None).await;
}

#[snappy_macros::test(features = "bulk_upload")]
async fn extract_tar_gz(ctx: TestContext, container: String) {
    extract(&ctx, &container, Compression::Gzip).await;
}

#[snappy_macros::test(features = "bulk_upload")]
async fn extract_tar_bz2(ctx: TestContext, container: String) {
    extract(&ctx, &container, Compression::Bzip2).await;
}
