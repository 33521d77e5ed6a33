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

//! Interfaces connecting the handler to its host pipeline
//!
//! The handler never talks to a concrete HTTP server. The host environment implements these
//! traits on its own request/response objects and calls
//! [`ServeStaticHandler::handle`](crate::ServeStaticHandler::handle) with them.

use async_trait::async_trait;
use http::{HeaderName, HeaderValue, Method, StatusCode};
use std::fmt::Debug;
use std::io;
use std::path::Path;

use crate::metadata::Metadata;

/// Read-only view of the incoming request.
pub trait RequestHead: Send + Sync {
    /// The request method.
    fn method(&self) -> &Method;

    /// The full request path as received by the server, before any routing rewrites.
    fn original_url(&self) -> &str;

    /// The route fragment the host router matched to reach this handler, if any. A trailing
    /// `*` wildcard is permitted and stripped during resolution.
    fn matched_route(&self) -> Option<&str>;
}

/// Write side of the outgoing response.
///
/// The handler only synthesizes headers and the status code. The byte transfer itself is the
/// host's file-sending primitive behind [`send_file`](Self::send_file), which also owns
/// `Content-Type` and `Content-Length`.
#[async_trait]
pub trait ResponseHandle: Send {
    /// Sets a response header, replacing any previous value for the same name.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Sets the response status code.
    fn set_status(&mut self, status: StatusCode);

    /// Sends a redirect to the given location.
    async fn redirect(&mut self, location: &str) -> io::Result<()>;

    /// Transfers the file at the given path onto the wire.
    async fn send_file(&mut self, path: &Path) -> io::Result<()>;

    /// Records a non-fatal failure for upstream inspection. Recording an error must not
    /// abort response processing.
    fn record_error(&mut self, error: io::Error);
}

/// Continuation handle signaling the host pipeline that this stage is done.
pub trait Continuation: Send {
    /// Passes control to the next pipeline stage.
    fn proceed(&mut self);
}

/// Capability to inject additional response headers before the file body is sent.
pub trait SetCustomHeaders: Debug + Send + Sync {
    /// Called with the response, the resolved file path and the file's metadata after the
    /// standard headers were set and before the body transfer starts.
    fn set_custom_headers(&self, response: &mut dyn ResponseHandle, path: &Path, metadata: &Metadata);
}
