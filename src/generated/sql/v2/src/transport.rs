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

//! Replace the HTTP transport used by the client.
//!
//! Applications rarely need this module. It is useful in tests, to verify
//! the requests created by the client without contacting the service.
//! Implementations receive fully bound requests: the path is expanded and
//! escaped, the `instance_crn` query parameter and all the headers are set.
//!
//! # Example
//! ```
//! use sql_query_v2::transport::{HttpRequest, Transport};
//! use sql_query_v2::{Response, Result};
//!
//! #[derive(Debug)]
//! struct Canned;
//!
//! #[async_trait::async_trait]
//! impl Transport for Canned {
//!     async fn send(&self, _request: HttpRequest) -> Result<Response<serde_json::Value>> {
//!         Ok(Response::from(serde_json::json!({"jobs": []})))
//!     }
//! }
//! ```

pub use gaxi::http::{HttpRequest, Transport};
