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

//! Credentials using a user name and password.
//!
//! Each request carries an `Authorization: Basic ...` header.

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::headers_util::{build_basic_headers, validate};
use http::HeaderMap;
use std::sync::Arc;

/// A builder for basic [Credentials].
#[derive(Debug)]
pub struct Builder {
    username: String,
    password: String,
}

impl Builder {
    /// Creates a builder with the given user name and password.
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if either value is empty or looks like a placeholder.
    pub fn build(self) -> BuildResult<Credentials> {
        if self.username.is_empty() {
            return Err(BuilderError::missing_field("username"));
        }
        if self.password.is_empty() {
            return Err(BuilderError::missing_field("password"));
        }
        validate("username", &self.username)?;
        validate("password", &self.password)?;
        Ok(Credentials {
            inner: Arc::new(BasicCredentials {
                username: self.username,
                password: self.password,
            }),
        })
    }
}

struct BasicCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_basic_headers(&self.username, &self.password)
    }
}
