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

//! Errors created while using credentials.

use http::StatusCode;
use std::error::Error;

pub use gax::error::CredentialsError;

/// A helper to create a transient error.
pub(crate) fn transient<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(true, source)
}

/// A helper to create a non-transient error.
pub(crate) fn non_transient<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_transient_from_msg<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

/// Returns true if a token request failing with this status code may
/// succeed in a future attempt.
pub(crate) fn is_transient(c: StatusCode) -> bool {
    matches!(
        c,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
    )
}
