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

use criterion::{Criterion, criterion_group, criterion_main};
use snappy::swift::http::StorageUrl;
use snappy::swift::signer::{DigestAlgorithm, SignatureRequest, temp_url_signature};

fn bench_temp_url(c: &mut Criterion) {
    let storage_url: StorageUrl = "https://storage.example.com/v1/AUTH_bench".parse().unwrap();

    c.bench_function("temp_url_signature sha1", |b| {
        b.iter(|| {
            temp_url_signature(
                "GET",
                1_700_000_000,
                "/v1/AUTH_bench/container/object",
                b"secret",
                DigestAlgorithm::Sha1,
            )
        })
    });

    c.bench_function("temp_url_signature sha256", |b| {
        b.iter(|| {
            temp_url_signature(
                "GET",
                1_700_000_000,
                "/v1/AUTH_bench/container/object",
                b"secret",
                DigestAlgorithm::Sha256,
            )
        })
    });

    c.bench_function("SignatureRequest::sign", |b| {
        b.iter(|| {
            SignatureRequest::builder()
                .method("get")
                .container("container")
                .object("object")
                .ttl_seconds(3600)
                .secret_key(&b"secret"[..])
                .build()
                .sign(&storage_url)
        })
    });
}

criterion_group!(benches, bench_temp_url);
criterion_main!(benches);
