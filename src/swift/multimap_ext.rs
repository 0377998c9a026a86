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

use crate::swift::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Adds the value only when present
    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>);

    /// Returns true if a key matches `name` ignoring ASCII case
    fn contains_key_ignore_case(&self, name: &str) -> bool;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.into());
        }
    }

    fn contains_key_ignore_case(&self, name: &str) -> bool {
        self.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

/// Merges caller headers over defaults; a caller header replaces every default with the
/// same name, compared case-insensitively.
pub fn merge_headers(defaults: &Multimap, overrides: Multimap) -> Multimap {
    let mut merged = Multimap::new();
    for (key, values) in defaults.iter_all() {
        if !overrides.contains_key_ignore_case(key) {
            merged.insert_many(key.clone(), values.clone());
        }
    }
    merged.add_multimap(overrides);
    merged
}
