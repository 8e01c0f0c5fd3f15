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

//! Common types for the SQL Query client libraries.
//!
//! This crate contains the error, response, and request option types shared
//! by the SQL Query client libraries for Rust. Applications rarely depend on
//! this crate directly, the client libraries re-export the types needed to
//! use them.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

pub mod client_builder;
pub mod options;
pub mod response;
