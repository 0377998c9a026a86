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
use snappy::swift::deserializer::{Format, deserialize};
use snappy::swift::types::StorageObject;

fn text_listing(n: usize) -> String {
    (0..n).map(|i| format!("object-{i:05}\n")).collect()
}

fn json_listing(n: usize) -> String {
    let records: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"name":"object-{i:05}","bytes":{i},"hash":"d41d8cd98f00b204e9800998ecf8427e","last_modified":"2024-01-01T00:00:00.000000","content_type":"text/plain"}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

fn xml_listing(n: usize) -> String {
    let records: String = (0..n)
        .map(|i| {
            format!(
                "<object><name>object-{i:05}</name><hash>d41d8cd98f00b204e9800998ecf8427e</hash><bytes>{i}</bytes><content_type>text/plain</content_type><last_modified>2024-01-01T00:00:00.000000</last_modified></object>"
            )
        })
        .collect();
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><container name=\"bench\">{records}</container>")
}

fn bench_listing(c: &mut Criterion) {
    let text = text_listing(1000);
    let json = json_listing(1000);
    let xml = xml_listing(1000);

    c.bench_function("deserialize text 1000", |b| {
        b.iter(|| deserialize::<StorageObject>(Format::Text, text.as_bytes()))
    });
    c.bench_function("deserialize json 1000", |b| {
        b.iter(|| deserialize::<StorageObject>(Format::Json, json.as_bytes()))
    });
    c.bench_function("deserialize xml 1000", |b| {
        b.iter(|| deserialize::<StorageObject>(Format::Xml, xml.as_bytes()))
    });
}

criterion_group!(benches, bench_listing);
criterion_main!(benches);
