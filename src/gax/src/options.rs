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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, applications may need to customize some calls made via a
//! client. For example, applications may add headers to correlate requests
//! with their own logs. The `*Builder` returned by each client method
//! implements the [RequestOptionsBuilder] trait where applications can
//! override some defaults.

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Adds a header to the request.
    ///
    /// Headers set here take precedence over the client default headers, and
    /// over the headers set by the client library. If the same header is set
    /// multiple times, the last value wins.
    pub fn insert_header<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
    }

    /// Gets the per-request headers, in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The SQL Query client libraries for Rust provide a builder for each
/// operation. These builders can be used to set the request parameters, e.g.,
/// the name of the table targeted by the request, as well as any options
/// affecting the request, such as additional headers.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Adds a header to this request.
    ///
    /// A header set here replaces any client default header with the same
    /// (case-insensitive) name.
    fn with_header<K: Into<String>, V: Into<String>>(self, name: K, value: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// the client builders.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.request_options().insert_header(name, value);
        self
    }
}
