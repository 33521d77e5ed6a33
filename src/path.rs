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

//! Path resolution logic

/// Normalizes the configured root path so that it carries exactly one leading slash and no
/// trailing slash. A root of `/` (the working directory itself) stays unchanged.
pub(crate) fn normalize_root(root: &str) -> String {
    let trimmed = root.trim_start_matches('/').trim_end_matches('/');
    format!("/{trimmed}")
}

/// Normalizes the matched route prefix: strips a single trailing `*` wildcard and ensures the
/// result ends with a slash.
pub(crate) fn normalize_route(route: &str) -> String {
    let route = route.strip_suffix('*').unwrap_or(route);
    if route.ends_with('/') {
        route.to_owned()
    } else {
        format!("{route}/")
    }
}

/// Maps the request path onto a candidate file path below the root directory.
///
/// When a matched route prefix is present and the request path starts with it, the tail after
/// the prefix is appended to the root. Otherwise the root itself is the candidate. The result
/// is anchored at `.` rather than at the filesystem root, so the raw request path can never
/// escape into an absolute location.
pub(crate) fn resolve_candidate(
    root: &str,
    original_url: &str,
    matched_route: Option<&str>,
) -> String {
    let mut file_path = root.to_owned();

    if let Some(route) = matched_route {
        let route = normalize_route(route);
        if let Some(tail) = original_url.strip_prefix(route.as_str()) {
            file_path.push('/');
            file_path.push_str(tail);
        }
    }

    format!(".{file_path}")
}
