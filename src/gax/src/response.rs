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

//! Response types.
//!
//! This module contains types related to SQL Query service responses.
//! Notably it contains the `Response` type itself.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use sql_query_gax::Result;
//! # use sql_query_gax::response::Response;
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a SQL Query service response.
///
/// A response consists of a body, the HTTP status code, and the response
/// headers.
///
/// # Example
/// ```
/// # use sql_query_gax::response::{Parts, Response};
/// let mut headers = http::HeaderMap::new();
/// headers.insert("x-request-id", http::HeaderValue::from_static("abc-123"));
/// let response = Response::from_parts(
///     Parts::new().set_status(http::StatusCode::CREATED).set_headers(headers),
///     "job-id".to_string(),
/// );
/// assert_eq!(response.status(), http::StatusCode::CREATED);
/// assert!(response.headers().get("x-request-id").is_some());
/// assert_eq!(response.into_body(), "job-id");
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// The status code defaults to `200 OK`, and the headers are empty.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code associated with this response.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, preserving the metadata.
    ///
    /// # Example
    /// ```
    /// # use sql_query_gax::response::Response;
    /// let response = Response::from("42".to_string());
    /// let response = response.map(|b| b.len());
    /// assert_eq!(response.body(), &2);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// The response parts, excluding the body. Applications may use this type
/// to create responses in their mocks.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,

    /// The HTTP headers or the gRPC metadata converted to HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status(mut self, v: http::StatusCode) -> Self {
        self.status = v;
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

impl std::default::Default for Parts {
    fn default() -> Self {
        Self {
            status: http::StatusCode::OK,
            headers: http::HeaderMap::new(),
        }
    }
}
