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

use crate::swift::builders::{
    BulkDelete, GetAccountMetadata, GetObjectMetadata, GetSwiftInfo, ListContainers, ListObjects,
};
use crate::swift::client::SwiftClient;
use crate::swift::creds::StaticProvider;
use crate::swift::response::a_response_traits::{
    HasContainer, HasEtag, HasMetadata, HasObject, HasSwiftFields, HasTransId,
};
use crate::swift::response::{
    BulkDeleteResponse, GetAccountMetadataResponse, GetObjectMetadataResponse,
    GetSwiftInfoResponse, ListContainersResponse, ListObjectsResponse,
};
use crate::swift::types::{FromSwiftResponse, SwiftRequest, ToSwiftRequest};
use bytes::Bytes;
use http::StatusCode;

fn client() -> SwiftClient {
    let storage_url = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
    SwiftClient::new(storage_url, Some(StaticProvider::new("token"))).unwrap()
}

fn http_response(status: StatusCode, headers: &[(&str, &str)], body: &str) -> reqwest::Response {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let resp = builder.body(Bytes::from(body.to_string())).unwrap();
    reqwest::Response::from(resp)
}

fn list_objects_request() -> SwiftRequest {
    ListObjects::builder()
        .client(client())
        .container("photos")
        .build()
        .to_swift_request()
        .unwrap()
}

#[tokio::test]
async fn test_list_objects_json_entity() {
    let body = r#"[{"name":"a","bytes":1,"hash":"h","last_modified":"t","content_type":"text/plain"},
                   {"name":"b","bytes":2,"hash":"h","last_modified":"t","content_type":"text/plain"}]"#;
    let resp = http_response(
        StatusCode::OK,
        &[
            ("Content-Type", "application/json; charset=utf-8"),
            ("X-Trans-Id", "tx123"),
            ("X-Container-Object-Count", "2"),
        ],
        body,
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.container(), "photos");
    assert_eq!(resp.trans_id(), Some("tx123"));
    let entity = resp.entity().unwrap();
    assert_eq!(entity.len(), 2);
    assert_eq!(entity[1].byte_count, Some(2));
    assert_eq!(resp.names(), vec!["a", "b"]);
    assert_eq!(resp.object_count(), Some(2));
}

#[tokio::test]
async fn test_list_objects_text_entity() {
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "text/plain; charset=utf-8")],
        "a\nb\n",
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.names(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_list_objects_invalid_body_keeps_raw_response() {
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "application/json")],
        "[{\"name\":",
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();
    assert!(resp.entity().is_none());
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body().as_ref(), b"[{\"name\":");
    assert!(resp.names().is_empty());
}

#[tokio::test]
async fn test_list_objects_no_content() {
    let resp = http_response(
        StatusCode::NO_CONTENT,
        &[("Content-Type", "text/plain; charset=utf-8")],
        "",
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.entity().is_none());
}

#[tokio::test]
async fn test_entity_follows_content_type_not_status() {
    let resp = http_response(
        StatusCode::NOT_FOUND,
        &[("Content-Type", "text/html; charset=UTF-8")],
        "<html><h1>Not Found</h1></html>",
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.names(), vec!["<html><h1>Not Found</h1></html>"]);

    let resp = http_response(
        StatusCode::UNAUTHORIZED,
        &[("Content-Type", "application/octet-stream")],
        "Unauthorized",
    );
    let resp = ListObjectsResponse::from_swift_response(list_objects_request(), Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.entity().is_none());
}

#[tokio::test]
async fn test_list_containers_xml_entity() {
    let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
        <account name=\"AUTH_test\">\
        <container><name>c1</name><count>3</count><bytes>30</bytes></container>\
        </account>";
    let req = ListContainers::builder()
        .client(client())
        .build()
        .to_swift_request()
        .unwrap();
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "application/xml; charset=utf-8")],
        body,
    );
    let resp = ListContainersResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    let entity = resp.entity().unwrap();
    assert_eq!(entity.len(), 1);
    assert_eq!(entity[0].name, "c1");
    assert_eq!(entity[0].object_count, Some(3));
    assert_eq!(entity[0].byte_count, Some(30));
}

#[tokio::test]
async fn test_account_metadata_headers() {
    let req = GetAccountMetadata::builder()
        .client(client())
        .build()
        .to_swift_request()
        .unwrap();
    let resp = http_response(
        StatusCode::NO_CONTENT,
        &[
            ("X-Account-Container-Count", "4"),
            ("X-Account-Object-Count", "12"),
            ("X-Account-Bytes-Used", "4096"),
            ("X-Account-Meta-Temp-URL-Key", "secret"),
        ],
        "",
    );
    let resp = GetAccountMetadataResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.container_count(), Some(4));
    assert_eq!(resp.object_count(), Some(12));
    assert_eq!(resp.bytes_used(), Some(4096));
    assert_eq!(
        resp.metadata().get("temp-url-key").map(String::as_str),
        Some("secret")
    );
}

#[tokio::test]
async fn test_object_metadata_headers() {
    let req = GetObjectMetadata::builder()
        .client(client())
        .container("c")
        .object("o")
        .build()
        .to_swift_request()
        .unwrap();
    let resp = http_response(
        StatusCode::OK,
        &[
            ("Content-Length", "5"),
            ("ETag", "\"5d41402abc4b2a76b9719d911017c592\""),
            ("X-Delete-At", "1900000000"),
            ("X-Object-Meta-Color", "blue"),
        ],
        "",
    );
    let resp = GetObjectMetadataResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    assert_eq!(resp.container(), "c");
    assert_eq!(resp.object(), "o");
    assert_eq!(resp.content_length(), Some(5));
    assert_eq!(resp.etag(), Some("5d41402abc4b2a76b9719d911017c592"));
    assert_eq!(resp.delete_at(), Some(1_900_000_000));
    assert_eq!(
        resp.metadata().get("color").map(String::as_str),
        Some("blue")
    );
}

#[tokio::test]
async fn test_bulk_delete_entity() {
    let req = BulkDelete::builder()
        .client(client())
        .targets(vec!["c/o".to_string()])
        .build()
        .to_swift_request()
        .unwrap();
    let body = r#"{"Number Deleted": 1, "Number Not Found": 0, "Errors": [],
                   "Response Status": "200 OK", "Response Body": ""}"#;
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "application/json; charset=utf-8")],
        body,
    );
    let resp = BulkDeleteResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    let entity = resp.entity().unwrap();
    assert_eq!(entity.number_deleted, 1);
    assert_eq!(entity.status_code(), Some(200));
}

#[tokio::test]
async fn test_bulk_delete_non_json_body() {
    let req = BulkDelete::builder()
        .client(client())
        .targets(vec!["c/o".to_string()])
        .build()
        .to_swift_request()
        .unwrap();
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "text/plain")],
        "Number Deleted: 1\nResponse Status: 200 OK",
    );
    let resp = BulkDeleteResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    assert!(resp.entity().is_none());
}

#[tokio::test]
async fn test_swift_info_entity() {
    let req = GetSwiftInfo::builder()
        .client(client())
        .build()
        .to_swift_request()
        .unwrap();
    let body = r#"{"swift": {"version": "2.30.0"}, "tempurl": {"methods": ["GET"]}}"#;
    let resp = http_response(
        StatusCode::OK,
        &[("Content-Type", "application/json; charset=UTF-8")],
        body,
    );
    let resp = GetSwiftInfoResponse::from_swift_response(req, Ok(resp))
        .await
        .unwrap();
    let info = resp.entity().unwrap();
    assert!(info.has_feature("tempurl"));
    assert!(!info.has_feature("slo"));
}
