// Copyright 2026 The SQL Query Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::build_errors::Error as BuilderError;
use crate::token::Token;
use crate::{BuildResult, Result, errors};
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Creates the `Authorization:` header for an access token.
pub(crate) fn build_bearer_headers(token: &Token) -> Result<HeaderMap> {
    build_headers(&format!("{} {}", token.token_type, token.token))
}

/// Creates the `Authorization:` header for a user name and password.
pub(crate) fn build_basic_headers(username: &str, password: &str) -> Result<HeaderMap> {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    build_headers(&format!("Basic {encoded}"))
}

fn build_headers(value: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(value).map_err(errors::non_transient)?;
    value.set_sensitive(true);

    let mut header_map = HeaderMap::new();
    header_map.insert(AUTHORIZATION, value);
    Ok(header_map)
}

/// Rejects credential values that look like documentation placeholders.
///
/// Values starting or ending with braces or double quotes are rejected.
pub(crate) fn validate(field: &'static str, value: &str) -> BuildResult<()> {
    const INVALID: &[char] = &['{', '}', '"'];
    if value.starts_with(INVALID) || value.ends_with(INVALID) {
        return Err(BuilderError::invalid_value(field));
    }
    Ok(())
}
