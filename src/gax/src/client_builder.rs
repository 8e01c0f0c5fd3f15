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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint or the authentication
//! credentials. Each client type defines a `builder()` function returning a
//! builder, and the builder `build()` function returns the [Result] defined
//! in this module.

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// Constructing a client never makes network requests. The errors are always
/// problems with the configuration provided by the application, or with the
/// configuration found in the environment.
///
/// # Examples
/// ```
/// use sql_query_gax::client_builder::Error;
/// fn handle(e: Error) {
///     if e.is_default_credentials() {
///         println!("cannot find credentials in the environment: {e}");
///     } else if e.is_configuration() {
///         println!("invalid client configuration: {e}");
///     } else {
///         println!("error during client initialization: {e}");
///     }
/// }
/// handle(Error::configuration("missing instance CRN"));
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client configuration is invalid or incomplete.
    ///
    /// For example, a required setting, such as the instance identifier, is
    /// missing.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// If true, the client could not resolve the credentials from the
    /// environment.
    ///
    /// This only happens when the application does not provide explicit
    /// credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration: {0}")]
    Configuration(#[source] BoxError),
    #[error("could not create default credentials: {0}")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client: {0}")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[doc(hidden)]
pub mod internal {
    /// Configure a client transport.
    ///
    /// The default configuration for each client should work for most
    /// applications. Some applications may need to override the default
    /// endpoint, the default authentication credentials, or enable tracing.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}
