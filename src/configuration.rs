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

//! Data structures required for `ServeStaticHandler` configuration

use clap::Parser;
use serde::Deserialize;

/// Command line options of the static serve module
#[derive(Debug, Default, Parser)]
pub struct ServeStaticOpt {
    /// URL-style path of the served directory, resolved relative to the working directory.
    #[clap(short, long)]
    pub root: Option<String>,

    /// File extension (without the leading dot) to try when the literal path is not found.
    /// This command line flag can be specified multiple times, extensions are tried in the
    /// given order.
    #[clap(long)]
    pub extension: Option<Vec<String>>,

    /// Serve index.html when the request path denotes a directory.
    #[clap(long)]
    pub serve_index: Option<bool>,

    /// Add a Last-Modified header to served files.
    #[clap(long)]
    pub last_modified: Option<bool>,

    /// max-age value in seconds for the Cache-Control header.
    #[clap(long)]
    pub max_age: Option<u32>,

    /// Redirect to the same path with a trailing slash when the path denotes a directory.
    #[clap(long)]
    pub redirect_on_directory: Option<bool>,
}

/// Configuration file settings of the static serve module
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServeStaticConf {
    /// URL-style path of the served directory, resolved relative to the working directory.
    /// Normalized on handler creation to carry exactly one leading slash and no trailing
    /// slash.
    pub root: String,

    /// Ordered list of file extensions (without the leading dot) to try when the literal
    /// path does not exist. The first existing candidate wins.
    pub extensions: Vec<String>,

    /// Whether index.html should be served when the request path denotes a directory.
    pub serve_index: bool,

    /// Whether served files should carry a Last-Modified header.
    pub last_modified: bool,

    /// max-age value in seconds for the Cache-Control header.
    pub max_age: u32,

    /// Whether a request path resolving to a directory should be answered with a redirect
    /// to the same path with a trailing slash appended.
    pub redirect_on_directory: bool,

    /// Whether the pipeline continuation should run even after a response was produced.
    /// `true` is the historic middleware behavior; with `false` the continuation only runs
    /// when this handler produced no response.
    pub always_proceed: bool,

    /// Whether a failed file transfer should be recorded on the response and answered with
    /// 500 Internal Server Error. With `false` the failure is ignored and the status still
    /// forced to 200, matching the historic middleware behavior.
    pub surface_send_errors: bool,
}

impl ServeStaticConf {
    /// Merges the command line options into the current configuration. Any command line
    /// options present overwrite existing settings.
    pub fn merge_with_opt(&mut self, opt: ServeStaticOpt) {
        if let Some(root) = opt.root {
            self.root = root;
        }

        if let Some(extensions) = opt.extension {
            self.extensions = extensions;
        }

        if let Some(serve_index) = opt.serve_index {
            self.serve_index = serve_index;
        }

        if let Some(last_modified) = opt.last_modified {
            self.last_modified = last_modified;
        }

        if let Some(max_age) = opt.max_age {
            self.max_age = max_age;
        }

        if let Some(redirect_on_directory) = opt.redirect_on_directory {
            self.redirect_on_directory = redirect_on_directory;
        }
    }
}

impl Default for ServeStaticConf {
    fn default() -> Self {
        Self {
            root: "/".to_owned(),
            extensions: Vec::new(),
            serve_index: true,
            last_modified: true,
            max_age: 0,
            redirect_on_directory: true,
            always_proceed: true,
            surface_send_errors: false,
        }
    }
}
