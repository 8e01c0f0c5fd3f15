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

//! Credentials for a pre-fetched bearer token.
//!
//! The application is responsible for obtaining the token, and for creating
//! new credentials before the token expires. These credentials never refresh
//! the token.
//!
//! # Example
//! ```
//! # use sql_query_auth::credentials::bearer_token::Builder;
//! # tokio_test::block_on(async {
//! let credentials = Builder::new("my-access-token").build()?;
//! let headers = credentials.headers().await?;
//! assert!(headers.contains_key(http::header::AUTHORIZATION));
//! # Ok::<(), anyhow::Error>(())
//! # });
//! ```

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::headers_util::{build_bearer_headers, validate};
use crate::token::Token;
use http::HeaderMap;
use std::sync::Arc;

/// A builder for bearer token [Credentials].
#[derive(Debug)]
pub struct Builder {
    token: String,
}

impl Builder {
    /// Creates a builder for `token`.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if the token is empty or looks like a placeholder.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.token.is_empty() {
            return Err(BuilderError::missing_field("bearer_token"));
        }
        validate("bearer_token", &self.token)?;
        Ok(Credentials {
            inner: Arc::new(BearerTokenCredentials {
                token: Token {
                    token: self.token,
                    token_type: "Bearer".to_string(),
                    expires_at: None,
                },
            }),
        })
    }
}

#[derive(Debug)]
struct BearerTokenCredentials {
    token: Token,
}

#[async_trait::async_trait]
impl CredentialsProvider for BearerTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_bearer_headers(&self.token)
    }
}
