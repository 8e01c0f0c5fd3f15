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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error using [Credentials] to create authentication headers.
///
/// An authenticator may fail to produce headers. For example, the token
/// service may be unavailable, or it may reject the API key.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code with mock credentials.
///
/// # Example
/// ```
/// # use sql_query_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create a token");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
///
/// [Credentials]: https://docs.rs/sql-query-auth/latest/sql_query_auth/credentials/struct.Credentials.html
#[derive(Clone, Debug)]
pub struct CredentialsError {
    /// If `true`, the operation that resulted in this error might succeed on
    /// a future attempt.
    is_transient: bool,

    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Example
    /// ```
    /// # use sql_query_gax::error::CredentialsError;
    /// let source = "not-a-number".parse::<u64>().unwrap_err();
    /// let err = CredentialsError::new(false, source);
    /// assert!(!err.is_transient());
    /// ```
    pub fn new<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    ///
    /// The message is reported as the error's [source][Error::source].
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError::new(
            is_transient,
            CredentialsErrorImpl::SimpleMessage(message.into()),
        )
    }

    /// Returns `true` if the error is transient and may succeed in future
    /// attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::error::Error for CredentialsErrorImpl {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(source) => Some(source.as_ref()),
        }
    }
}

impl Display for CredentialsErrorImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self {
            CredentialsErrorImpl::SimpleMessage(message) => write!(f, "{message}"),
            CredentialsErrorImpl::Source(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        write!(
            f,
            "cannot create the authentication headers, {msg}, source: {}",
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn new(transient: bool) {
        let source = "test-only".parse::<u32>().unwrap_err();
        let got = CredentialsError::new(transient, source);
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(got.source().is_some(), "{got}");
        let inner = got
            .source()
            .and_then(|e| e.downcast_ref::<std::num::ParseIntError>());
        assert!(inner.is_some(), "{got:?}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let got = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(got.is_transient(), transient, "{got}");
        let source = got.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("test-only"), "{got:?}");
        assert!(format!("{got}").contains("test-only"), "{got}");
    }

    #[test]
    fn fmt() {
        let e = CredentialsError::from_msg(true, "test-only-err-123");
        let got = format!("{e}");
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(TRANSIENT_MSG), "{got}");

        let e = CredentialsError::from_msg(false, "test-only-err-123");
        let got = format!("{e}");
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(PERMANENT_MSG), "{got}");
    }

    #[test]
    fn source() {
        let got = CredentialsErrorImpl::SimpleMessage("test-only".into());
        assert!(got.source().is_none(), "{got}");
        let got = CredentialsErrorImpl::Source(Arc::new(CredentialsError::from_msg(
            false,
            "test-only",
        )));
        let inner = got
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(inner.is_some(), "{got:?}");
    }
}
