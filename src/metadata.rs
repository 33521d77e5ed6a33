// Copyright 2026 the serve-static-module authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File metadata handling and the filesystem query interface

use httpdate::fmt_http_date;
use std::fmt::Debug;
use std::io::{Error, ErrorKind};
use std::path::Path;
use std::time::SystemTime;

/// Classification of a filesystem path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// The path does not exist.
    Missing,
    /// The path exists and is a regular file.
    File,
    /// The path exists and is a directory.
    Directory,
}

/// Helper wrapping the file metadata relevant for response headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// File size in bytes
    pub size: u64,
    /// Last modified time of the file if the filesystem reports one
    pub modified: Option<SystemTime>,
}

impl Metadata {
    /// Last modified time in the format `Fri, 15 May 2015 15:34:21 GMT` if available.
    pub fn modified_http_date(&self) -> Option<String> {
        self.modified.map(fmt_http_date)
    }
}

/// Filesystem queries performed during path resolution and serving.
pub trait FileSystem: Debug + Send + Sync {
    /// Checks whether the path exists and whether it denotes a directory.
    fn classify(&self, path: &Path) -> FileKind;

    /// Retrieves the metadata of an existing regular file.
    ///
    /// This method will return any errors produced by the underlying filesystem query. It
    /// will also result in an [`ErrorKind::InvalidInput`] error if the path given doesn't
    /// point to a regular file.
    fn metadata(&self, path: &Path) -> Result<Metadata, Error>;
}

/// [`FileSystem`] implementation backed by [`std::fs`], the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn classify(&self, path: &Path) -> FileKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => FileKind::Directory,
            Ok(_) => FileKind::File,
            Err(_) => FileKind::Missing,
        }
    }

    fn metadata(&self, path: &Path) -> Result<Metadata, Error> {
        let meta = std::fs::metadata(path)?;

        if !meta.is_file() {
            return Err(ErrorKind::InvalidInput.into());
        }

        Ok(Metadata {
            size: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}
