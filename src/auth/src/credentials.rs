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

//! Types and functions to work with SQL Query [Credentials].

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::config::{self, ConfigSource};
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

pub mod anonymous;
pub mod basic;
pub mod bearer_token;
pub mod iam;

pub use crate::errors::CredentialsError;

/// A `Result` alias where the `Err` case is [CredentialsError].
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// The auth type used when the configuration names an IAM API key.
pub const AUTH_TYPE_IAM: &str = "iam";
/// The auth type used for pre-fetched bearer tokens.
pub const AUTH_TYPE_BEARER_TOKEN: &str = "bearertoken";
/// The auth type used for user name and password.
pub const AUTH_TYPE_BASIC: &str = "basic";
/// The auth type for unauthenticated requests.
pub const AUTH_TYPE_NO_AUTH: &str = "noauth";

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents the credentials used to authenticate requests to the SQL
/// Query service. The clients call [Credentials::headers] before each request
/// and attach the result to it.
///
/// Credentials that exchange a long-lived secret for a short-lived token
/// cache the token and refresh it shortly before it expires.
#[derive(Clone, Debug)]
pub struct Credentials {
    // The clients holding credentials are `Clone` and may be shared across
    // threads.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Produces the authentication headers for a request.
///
/// # Notes
///
/// Applications can implement this trait, along with
/// [Credentials::from()], to mock the credentials in their tests.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// The underlying implementation refreshes any cached token as needed.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// Resolves [Credentials] from named configuration.
///
/// The builder reads the `<SERVICE_NAME>_AUTH_TYPE` key to select the kind of
/// credentials, and then the properties for that kind:
///
/// | Auth type     | Properties                                          |
/// | ------------- | --------------------------------------------------- |
/// | `iam`         | `APIKEY`, optional `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET`, `SCOPE` |
/// | `bearertoken` | `BEARER_TOKEN`                                      |
/// | `basic`       | `USERNAME`, `PASSWORD`                              |
/// | `noauth`      | none                                                |
///
/// The auth type is case insensitive. If it is not set, but an `APIKEY` is,
/// the builder uses `iam`.
///
/// # Example
/// ```
/// # use sql_query_auth::credentials::Builder;
/// # use std::collections::HashMap;
/// let source = HashMap::from([
///     ("SQL_AUTH_TYPE".to_string(), "bearertoken".to_string()),
///     ("SQL_BEARER_TOKEN".to_string(), "my-token".to_string()),
/// ]);
/// let credentials = Builder::new("sql").with_config_source(source).build();
/// assert!(credentials.is_ok());
/// ```
#[derive(Debug)]
pub struct Builder {
    service_name: String,
    source: Option<Box<dyn ConfigSource>>,
}

impl Builder {
    /// Creates a builder for the given service name.
    pub fn new<T: Into<String>>(service_name: T) -> Self {
        Self {
            service_name: service_name.into(),
            source: None,
        }
    }

    /// Sets the configuration source.
    ///
    /// By default, the builder uses [config::default_source].
    pub fn with_config_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns a [BuilderError] if no credentials are configured for the
    /// service, if the configuration is incomplete or invalid, or if the
    /// default configuration sources cannot be loaded.
    pub fn build(self) -> BuildResult<Credentials> {
        match self.source {
            Some(source) => from_config_source(&self.service_name, source.as_ref()),
            None => {
                let source = config::default_source()?;
                from_config_source(&self.service_name, &source)
            }
        }
    }
}

/// Resolves [Credentials] for `service_name` from `source`.
///
/// See [Builder] for the configuration keys.
pub fn from_config_source(
    service_name: &str,
    source: &dyn ConfigSource,
) -> BuildResult<Credentials> {
    let get = |property: &str| source.get(&config::key(service_name, property));
    let require = |property: &'static str| {
        get(property)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BuilderError::missing_field(property))
    };

    let auth_type = match get("AUTH_TYPE") {
        Some(t) => t.to_ascii_lowercase(),
        None if get("APIKEY").is_some() => AUTH_TYPE_IAM.to_string(),
        None => return Err(BuilderError::not_found(service_name)),
    };
    tracing::debug!(
        service_name,
        auth_type = auth_type.as_str(),
        "resolving credentials from configuration"
    );

    match auth_type.as_str() {
        AUTH_TYPE_IAM => {
            let builder = iam::Builder::new(require("APIKEY")?);
            let builder = match get("AUTH_URL") {
                Some(url) => builder.with_url(url),
                None => builder,
            };
            let builder = match (get("CLIENT_ID"), get("CLIENT_SECRET")) {
                (Some(id), Some(secret)) => builder.with_client_id_and_secret(id, secret),
                (Some(_), None) => return Err(BuilderError::missing_field("CLIENT_SECRET")),
                (None, Some(_)) => return Err(BuilderError::missing_field("CLIENT_ID")),
                (None, None) => builder,
            };
            let builder = match get("SCOPE") {
                Some(scope) => builder.with_scope(scope),
                None => builder,
            };
            builder.build()
        }
        AUTH_TYPE_BEARER_TOKEN => bearer_token::Builder::new(require("BEARER_TOKEN")?).build(),
        AUTH_TYPE_BASIC => {
            basic::Builder::new(require("USERNAME")?, require("PASSWORD")?).build()
        }
        AUTH_TYPE_NO_AUTH => Ok(anonymous::Builder::new().build()),
        other => Err(BuilderError::unknown_type(format!(
            "`{other}` is not one of {AUTH_TYPE_IAM}, {AUTH_TYPE_BEARER_TOKEN}, {AUTH_TYPE_BASIC} or {AUTH_TYPE_NO_AUTH}"
        ))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use http::header::AUTHORIZATION;
    use std::collections::HashMap;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        pub Source {}

        impl ConfigSource for Source {
            fn get(&self, key: &str) -> Option<String>;
        }
    }

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[derive(Debug)]
    struct Fake;

    impl CredentialsProvider for Fake {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert("x-test-only", http::HeaderValue::from_static("fake"));
            Ok(headers)
        }
    }

    #[tokio::test]
    async fn from_provider() -> TestResult {
        let credentials = Credentials::from(Fake);
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get("x-test-only"),
            Some(&http::HeaderValue::from_static("fake"))
        );
        let clone = credentials.clone();
        assert_eq!(clone.headers().await?, headers);
        Ok(())
    }

    #[test_case("bearertoken")]
    #[test_case("BearerToken")]
    #[test_case("BEARERTOKEN")]
    #[tokio::test]
    async fn bearer_token_from_config(auth_type: &str) -> TestResult {
        let source = source(&[
            ("SQL_AUTH_TYPE", auth_type),
            ("SQL_BEARER_TOKEN", "test-token"),
        ]);
        let credentials = from_config_source("sql", &source)?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn basic_from_config() -> TestResult {
        let source = source(&[
            ("SQL_AUTH_TYPE", "basic"),
            ("SQL_USERNAME", "user"),
            ("SQL_PASSWORD", "pass"),
        ]);
        let credentials = from_config_source("sql", &source)?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&http::HeaderValue::from_static("Basic dXNlcjpwYXNz"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn noauth_from_config() -> TestResult {
        let source = source(&[("MY_SQL_AUTH_TYPE", "noauth")]);
        let credentials = from_config_source("my-sql", &source)?;
        assert!(credentials.headers().await?.is_empty());
        Ok(())
    }

    #[test]
    fn iam_from_config() -> TestResult {
        let source = source(&[
            ("SQL_AUTH_TYPE", "iam"),
            ("SQL_APIKEY", "test-key"),
            ("SQL_AUTH_URL", "https://iam.test.example.com"),
            ("SQL_CLIENT_ID", "id"),
            ("SQL_CLIENT_SECRET", "secret"),
            ("SQL_SCOPE", "scope"),
        ]);
        let credentials = from_config_source("sql", &source)?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("iam.test.example.com"), "{fmt}");
        assert!(!fmt.contains("test-key"), "{fmt}");
        Ok(())
    }

    #[test]
    fn iam_implied_by_apikey() -> TestResult {
        let source = source(&[("SQL_APIKEY", "test-key")]);
        let credentials = from_config_source("sql", &source)?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("IamCredentials"), "{fmt}");
        Ok(())
    }

    #[test_case(&[("SQL_AUTH_TYPE", "iam")], "APIKEY")]
    #[test_case(&[("SQL_AUTH_TYPE", "iam"), ("SQL_APIKEY", "")], "APIKEY")]
    #[test_case(&[("SQL_AUTH_TYPE", "iam"), ("SQL_APIKEY", "k"), ("SQL_CLIENT_ID", "id")], "CLIENT_SECRET")]
    #[test_case(&[("SQL_AUTH_TYPE", "iam"), ("SQL_APIKEY", "k"), ("SQL_CLIENT_SECRET", "s")], "CLIENT_ID")]
    #[test_case(&[("SQL_AUTH_TYPE", "bearertoken")], "BEARER_TOKEN")]
    #[test_case(&[("SQL_AUTH_TYPE", "basic"), ("SQL_USERNAME", "user")], "PASSWORD")]
    #[test_case(&[("SQL_AUTH_TYPE", "basic"), ("SQL_PASSWORD", "pass")], "USERNAME")]
    fn missing_field(pairs: &[(&str, &str)], field: &str) {
        let source = source(pairs);
        let err = from_config_source("sql", &source).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains(field), "{err}");
    }

    #[test]
    fn invalid_value() {
        let source = source(&[("SQL_APIKEY", "{apikey}")]);
        let err = from_config_source("sql", &source).unwrap_err();
        assert!(err.is_invalid_value(), "{err:?}");
    }

    #[test]
    fn unknown_type() {
        let source = source(&[("SQL_AUTH_TYPE", "container")]);
        let err = from_config_source("sql", &source).unwrap_err();
        assert!(err.is_unknown_type(), "{err:?}");
        assert!(err.to_string().contains("container"), "{err}");
    }

    #[test]
    fn not_found() {
        let mut mock = MockSource::new();
        mock.expect_get().times(2).returning(|_| None);
        let err = from_config_source("sql", &mock).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
        assert!(err.to_string().contains("`sql`"), "{err}");
    }

    #[test]
    fn not_found_other_service() {
        let source = source(&[("OTHER_APIKEY", "test-key")]);
        let err = from_config_source("sql", &source).unwrap_err();
        assert!(err.is_not_found(), "{err:?}");
    }

    #[test]
    fn builder_with_source() -> TestResult {
        let mut mock = MockSource::new();
        mock.expect_get()
            .withf(|k| k == "SQL_AUTH_TYPE")
            .return_const(Some("noauth".to_string()));
        let _credentials = Builder::new("sql").with_config_source(mock).build()?;
        Ok(())
    }
}
