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

//! Anonymous credentials.
//!
//! These credentials do not add any authentication headers. They are useful
//! for tests, or with proxies that authenticate requests on behalf of the
//! application.

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use http::HeaderMap;
use std::sync::Arc;

#[derive(Debug)]
struct AnonymousCredentials;

/// A builder for creating anonymous credentials.
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(AnonymousCredentials),
        }
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for AnonymousCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}
