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

//! # Static file serving middleware
//!
//! This crate provides a single pipeline stage that maps `GET`/`HEAD` request paths to files
//! below a configured root directory and serves them through the host pipeline's own response
//! primitives. It owns the resolution policy only; routing, connection handling and the actual
//! byte transfer stay with the host.
//!
//! ## Supported functionality
//!
//! * `GET` and `HEAD` requests, everything else is passed through untouched
//! * Stripping of the matched route prefix (`/static/*` style mounts)
//! * `index.html` fallback for request paths ending in a slash
//! * Redirect to `path/` when the request path names a directory
//! * Extension probing for missing paths (`/page` served as `page.htm`), first match wins
//! * `Cache-Control: max-age=...` and optional `Last-Modified` headers
//! * Custom header injection through the [`SetCustomHeaders`](pipeline::SetCustomHeaders)
//!   capability
//!
//! ## Behavioral quirks inherited from the classic middleware
//!
//! Two policies of the well-known middleware this crate models are questionable and therefore
//! configurable instead of hard-wired:
//!
//! * The continuation is historically signaled even after a response was produced. This is the
//!   default (`always_proceed = true`); downstream stages must tolerate running after a
//!   completed response. Set `always_proceed = false` to only continue when nothing was served.
//! * A failed file transfer is historically ignored and the response status still forced
//!   to 200. This is the default (`surface_send_errors = false`); set the flag to record the
//!   failure on the response and produce 500 instead.
//!
//! ## Code example
//!
//! The handler is constructed once from its configuration and then called per request with the
//! host pipeline's request, response and continuation objects:
//!
//! ```rust
//! use serve_static_module::{ServeStaticConf, ServeStaticHandler};
//!
//! let conf = ServeStaticConf {
//!     root: "/public".to_owned(),
//!     extensions: vec!["html".to_owned(), "htm".to_owned()],
//!     ..Default::default()
//! };
//! let handler = ServeStaticHandler::new(conf);
//! assert_eq!(handler.conf().root, "/public");
//! ```
//!
//! File paths are always resolved relative to the process working directory: the configured
//! root is prefixed with `.` before any filesystem access, so a raw request path can never
//! address an absolute filesystem location.

mod configuration;
mod handler;
pub mod metadata;
mod path;
pub mod pipeline;

pub use configuration::{ServeStaticConf, ServeStaticOpt};
pub use handler::ServeStaticHandler;
