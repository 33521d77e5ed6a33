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

//! The static file serving pipeline stage

use http::{header, HeaderValue, Method, StatusCode};
use log::{debug, warn};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::configuration::ServeStaticConf;
use crate::metadata::{FileKind, FileSystem, StdFileSystem};
use crate::path::{normalize_root, resolve_candidate};
use crate::pipeline::{Continuation, RequestHead, ResponseHandle, SetCustomHeaders};

/// Handler mapping `GET`/`HEAD` request paths to files below the configured root directory
#[derive(Debug)]
pub struct ServeStaticHandler {
    conf: ServeStaticConf,
    custom_headers: Option<Box<dyn SetCustomHeaders>>,
    fs: Box<dyn FileSystem>,
}

impl ServeStaticHandler {
    /// Creates a new handler with the given configuration. The configured root path is
    /// normalized to carry exactly one leading slash and no trailing slash.
    pub fn new(mut conf: ServeStaticConf) -> Self {
        conf.root = normalize_root(&conf.root);
        debug!("initialized static serve handler, settings: {conf:#?}");
        Self {
            conf,
            custom_headers: None,
            fs: Box::new(StdFileSystem),
        }
    }

    /// Injects a capability adding further response headers before a file body is sent.
    pub fn with_custom_headers(mut self, setter: Box<dyn SetCustomHeaders>) -> Self {
        self.custom_headers = Some(setter);
        self
    }

    /// Replaces the filesystem implementation used for existence checks and metadata queries.
    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Provides read-only access to the handler's configuration.
    pub fn conf(&self) -> &ServeStaticConf {
        &self.conf
    }

    /// Handles the current request.
    ///
    /// Requests with methods other than `GET` and `HEAD` are passed through without touching
    /// the filesystem. Whether the continuation runs after a response was produced is
    /// controlled by the `always_proceed` setting; on every branch it runs exactly once or
    /// not at all, never twice.
    pub async fn handle(
        &self,
        request: &dyn RequestHead,
        response: &mut dyn ResponseHandle,
        next: &mut dyn Continuation,
    ) {
        match *request.method() {
            Method::GET | Method::HEAD => {}
            _ => {
                debug!("passing through request method {}", request.method());
                next.proceed();
                return;
            }
        }

        let original_url = request.original_url();
        let mut file_path =
            resolve_candidate(&self.conf.root, original_url, request.matched_route());
        debug!("request path {original_url} translated into file path {file_path}");

        if file_path.ends_with('/') {
            if !self.conf.serve_index {
                next.proceed();
                return;
            }
            file_path.push_str("index.html");
        }

        let mut responded = false;
        let path = PathBuf::from(&file_path);
        match self.fs.classify(&path) {
            FileKind::Directory => {
                if self.conf.redirect_on_directory {
                    let location = format!("{original_url}/");
                    debug!("redirecting directory request to {location}");
                    if let Err(err) = response.redirect(&location).await {
                        warn!("failed redirecting to {location}: {err}");
                        response.record_error(err);
                    }
                    responded = true;
                }
            }
            FileKind::File => {
                self.serve_file(&path, response).await;
                responded = true;
            }
            FileKind::Missing => {
                for extension in &self.conf.extensions {
                    let candidate = PathBuf::from(format!("{file_path}.{extension}"));
                    if self.fs.classify(&candidate) == FileKind::File {
                        debug!("serving extension fallback candidate {candidate:?}");
                        self.serve_file(&candidate, response).await;
                        responded = true;
                        break;
                    }
                }
            }
        }

        if self.conf.always_proceed || !responded {
            next.proceed();
        }
    }

    /// Serves a confirmed-existing regular file: synthesizes the headers and delegates the
    /// byte transfer to the response's file-sending primitive.
    async fn serve_file(&self, path: &Path, response: &mut dyn ResponseHandle) {
        match self.try_serve_file(path, response).await {
            Ok(()) => response.set_status(StatusCode::OK),
            Err(err) => {
                if self.conf.surface_send_errors {
                    warn!("failed serving file {path:?}: {err}");
                    response.record_error(err);
                    response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                } else {
                    // Historic middleware behavior: the failure is ignored and the request
                    // still reports success.
                    debug!("ignoring failed file transfer for {path:?}: {err}");
                    response.set_status(StatusCode::OK);
                }
            }
        }
    }

    async fn try_serve_file(
        &self,
        path: &Path,
        response: &mut dyn ResponseHandle,
    ) -> Result<(), Error> {
        let metadata = self.fs.metadata(path)?;

        response.set_header(
            header::CACHE_CONTROL,
            header_value(format!("max-age={}", self.conf.max_age))?,
        );

        if self.conf.last_modified {
            if let Some(date) = metadata.modified_http_date() {
                response.set_header(header::LAST_MODIFIED, header_value(date)?);
            }
        }

        if let Some(setter) = &self.custom_headers {
            setter.set_custom_headers(response, path, &metadata);
        }

        response.send_file(path).await
    }
}

fn header_value(value: String) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(&value).map_err(|err| Error::new(ErrorKind::InvalidData, err))
}
