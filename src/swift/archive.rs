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

//! In-memory tar archives for the bulk extract middleware
//!
//! Each entry holds the MD5 hex digest of its own name, so a test can check the
//! extracted objects without keeping the archive around.

use crate::swift::error::{Error, IoError, ValidationErr};
use crate::swift::utils::md5_hash;
use bytes::Bytes;
use bzip2::Compression as BzLevel;
use bzip2::write::BzEncoder;
use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Archive formats accepted by `?extract-archive`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Plain tar.
    #[default]
    None,
    /// Gzip compressed tar.
    Gzip,
    /// Bzip2 compressed tar.
    Bzip2,
}

impl Compression {
    /// Value of the `extract-archive` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "tar",
            Compression::Gzip => "tar.gz",
            Compression::Bzip2 => "tar.bz2",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compression {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "tar" => Ok(Compression::None),
            "gz" | "tar.gz" => Ok(Compression::Gzip),
            "bz2" | "tar.bz2" => Ok(Compression::Bzip2),
            _ => Err(ValidationErr::UnsupportedCompression(s.to_string())),
        }
    }
}

fn tar_bytes<N: AsRef<str>>(entry_names: &[N]) -> std::io::Result<Vec<u8>> {
    let mut builder = tar::Builder::new(Vec::new());
    for name in entry_names {
        let name = name.as_ref();
        let content = md5_hash(name.as_bytes());

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(0);
        builder.append_data(&mut header, name, content.as_bytes())?;
    }
    builder.into_inner()
}

/// Builds an archive with one entry per name, compressed as requested.
///
/// Names may contain `/`; with an account level upload path the first segment names
/// the container each entry is extracted into.
pub fn create_archive<N: AsRef<str>>(
    entry_names: &[N],
    compression: Compression,
) -> Result<Bytes, Error> {
    let tar = tar_bytes(entry_names).map_err(IoError::IOError)?;
    let data = match compression {
        Compression::None => tar,
        Compression::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
            encoder.write_all(&tar).map_err(IoError::IOError)?;
            encoder.finish().map_err(IoError::IOError)?
        }
        Compression::Bzip2 => {
            let mut encoder = BzEncoder::new(Vec::new(), BzLevel::default());
            encoder.write_all(&tar).map_err(IoError::IOError)?;
            encoder.finish().map_err(IoError::IOError)?
        }
    };
    log::debug!(
        "created {} archive with {} entries ({} bytes)",
        compression,
        entry_names.len(),
        data.len()
    );
    Ok(Bytes::from(data))
}
