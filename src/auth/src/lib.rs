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

//! SQL Query Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! the SQL Query service. The clients consume an implementation of
//! [credentials::Credentials] and use these credentials to create the
//! authentication headers for each request.
//!
//! Four kinds of credentials are supported:
//!
//! * [IAM API keys][credentials::iam], exchanged for short-lived access
//!   tokens.
//! * Pre-fetched [bearer tokens][credentials::bearer_token].
//! * [Basic][credentials::basic] user name and password.
//! * [No authentication][credentials::anonymous], typically for tests.
//!
//! When the application does not configure any credentials, the clients
//! resolve them from [configuration sources][config], such as environment
//! variables or a credentials file.

pub mod build_errors;
pub mod config;
pub mod credentials;
pub mod errors;

/// Types and functions to work with access tokens.
pub mod token;

/// The token cache
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `sql_query_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

/// A `Result` alias where the `Err` case is [build_errors::Error].
pub(crate) type BuildResult<T> = std::result::Result<T, build_errors::Error>;

pub(crate) mod headers_util;
