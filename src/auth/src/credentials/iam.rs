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

//! IAM API key credentials.
//!
//! IBM Cloud services authenticate requests using short-lived access tokens.
//! These credentials exchange an API key for an access token using the IAM
//! token service, cache the token, and refresh it shortly before it expires.
//!
//! # Example
//! ```
//! # use sql_query_auth::credentials::iam::Builder;
//! let credentials = Builder::new("my-api-key")
//!     .with_url("https://iam.test.cloud.ibm.com")
//!     .build();
//! assert!(credentials.is_ok());
//! ```

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, CredentialsError, Result};
use crate::errors::{self, is_transient};
use crate::headers_util::{build_bearer_headers, validate};
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use http::header::{ACCEPT, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// The default IAM token service.
pub const DEFAULT_URL: &str = "https://iam.cloud.ibm.com";

const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";

/// A builder for IAM [Credentials].
#[derive(Clone)]
pub struct Builder {
    apikey: String,
    url: Option<String>,
    client_id_and_secret: Option<(String, String)>,
    scope: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("apikey", &"[censored]")
            .field("url", &self.url)
            .field(
                "client_id",
                &self.client_id_and_secret.as_ref().map(|(id, _)| id),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

impl Builder {
    /// Creates a builder for the given API key.
    pub fn new<T: Into<String>>(apikey: T) -> Self {
        Self {
            apikey: apikey.into(),
            url: None,
            client_id_and_secret: None,
            scope: None,
        }
    }

    /// Sets the IAM token service URL.
    ///
    /// The `/identity/token` path is appended if not already present. The
    /// default is [DEFAULT_URL].
    pub fn with_url<T: Into<String>>(mut self, url: T) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Authenticates the token requests with a client id and secret.
    pub fn with_client_id_and_secret<I, S>(mut self, client_id: I, client_secret: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        self.client_id_and_secret = Some((client_id.into(), client_secret.into()));
        self
    }

    /// Requests tokens restricted to the given scope.
    pub fn with_scope<T: Into<String>>(mut self, scope: T) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// No requests are made until the credentials are first used.
    pub fn build(self) -> BuildResult<Credentials> {
        let token_provider = self.build_token_provider()?;
        Ok(Credentials {
            inner: Arc::new(IamCredentials {
                token_provider: TokenCache::new(token_provider),
            }),
        })
    }

    fn build_token_provider(self) -> BuildResult<IamTokenProvider> {
        if self.apikey.is_empty() {
            return Err(BuilderError::missing_field("apikey"));
        }
        validate("apikey", &self.apikey)?;
        if let Some((id, secret)) = &self.client_id_and_secret {
            validate("client_id", id)?;
            validate("client_secret", secret)?;
        }
        Ok(IamTokenProvider {
            client: reqwest::Client::new(),
            endpoint: token_endpoint(self.url.as_deref().unwrap_or(DEFAULT_URL)),
            apikey: self.apikey,
            client_id_and_secret: self.client_id_and_secret,
            scope: self.scope,
        })
    }
}

fn token_endpoint(url: &str) -> String {
    let url = url.trim_end_matches('/');
    if url.ends_with(TOKEN_PATH) {
        return url.to_string();
    }
    format!("{url}{TOKEN_PATH}")
}

struct IamTokenProvider {
    client: reqwest::Client,
    endpoint: String,
    apikey: String,
    client_id_and_secret: Option<(String, String)>,
    scope: Option<String>,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("endpoint", &self.endpoint)
            .field("apikey", &"[censored]")
            .field(
                "client_id",
                &self.client_id_and_secret.as_ref().map(|(id, _)| id),
            )
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    token_type: String,
    expires_in: Option<u64>,
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut form = vec![
            ("grant_type", GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }
        let builder = self
            .client
            .post(self.endpoint.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&form);
        let builder = match &self.client_id_and_secret {
            Some((id, secret)) => builder.basic_auth(id, Some(secret)),
            None => builder,
        };
        tracing::debug!(endpoint = self.endpoint.as_str(), "requesting IAM token");
        let resp = builder.send().await.map_err(errors::transient)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| CredentialsError::new(is_transient(status), e))?;
            return Err(CredentialsError::from_msg(
                is_transient(status),
                format!("failed to fetch IAM token, status {status}. {body}"),
            ));
        }
        let response = resp.json::<IamTokenResponse>().await.map_err(|e| {
            let transient = !e.is_decode();
            CredentialsError::new(transient, e)
        })?;
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type,
            expires_at: response
                .expires_in
                .map(|d| Instant::now() + Duration::from_secs(d)),
        })
    }
}

#[derive(Debug)]
struct IamCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for IamCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::MockTokenProvider;
    use http::header::AUTHORIZATION;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn token_response() -> serde_json::Value {
        json!({
            "access_token": "test-access-token",
            "refresh_token": "not-used",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_700_000_000,
        })
    }

    #[test_case("https://iam.cloud.ibm.com", "https://iam.cloud.ibm.com/identity/token")]
    #[test_case("https://iam.cloud.ibm.com/", "https://iam.cloud.ibm.com/identity/token")]
    #[test_case(
        "https://iam.cloud.ibm.com/identity/token",
        "https://iam.cloud.ibm.com/identity/token"
    )]
    fn endpoint(input: &str, want: &str) {
        assert_eq!(token_endpoint(input), want);
    }

    #[test]
    fn debug_is_censored() -> TestResult {
        let builder = Builder::new("test-apikey").with_client_id_and_secret("id", "test-secret");
        let fmt = format!("{builder:?}");
        assert!(!fmt.contains("test-apikey"), "{fmt}");
        assert!(!fmt.contains("test-secret"), "{fmt}");

        let creds = builder.build()?;
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("test-apikey"), "{fmt}");
        assert!(!fmt.contains("test-secret"), "{fmt}");
        assert!(fmt.contains(DEFAULT_URL), "{fmt}");
        Ok(())
    }

    #[test]
    fn build_errors() {
        let err = Builder::new("").build().unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");

        let err = Builder::new("\"apikey\"").build().unwrap_err();
        assert!(err.is_invalid_value(), "{err:?}");

        let err = Builder::new("apikey")
            .with_client_id_and_secret("{id}", "secret")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_value(), "{err:?}");
    }

    #[tokio::test]
    async fn headers_from_token_provider() -> TestResult {
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| {
            Ok(Token {
                token: "test-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_at: None,
            })
        });
        let creds = IamCredentials {
            token_provider: mock,
        };
        let headers = creds.headers().await?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn headers_failure() -> TestResult {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Err(errors::non_transient_from_msg("fail")));
        let creds = IamCredentials {
            token_provider: mock,
        };
        let err = creds.headers().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn token_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("accept", "application/json"))),
                request::body(url_decoded(contains(("apikey", "test-apikey")))),
                request::body(url_decoded(contains(("grant_type", GRANT_TYPE)))),
                request::body(url_decoded(contains(("response_type", "cloud_iam")))),
            ])
            .respond_with(json_encoded(token_response())),
        );

        let provider = Builder::new("test-apikey")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider()?;
        let now = Instant::now();
        let token = provider.token().await?;
        assert_eq!(token.token, "test-access-token");
        assert_eq!(token.token_type, "Bearer");
        assert!(
            token
                .expires_at
                .is_some_and(|e| e >= now + Duration::from_secs(3600)),
            "{token:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn token_with_client_and_scope() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                // base64("id:secret")
                request::headers(contains(("authorization", "Basic aWQ6c2VjcmV0"))),
                request::body(url_decoded(contains(("scope", "test-scope")))),
            ])
            .respond_with(json_encoded(token_response())),
        );

        let provider = Builder::new("test-apikey")
            .with_url(format!("http://{}/identity/token", server.addr()))
            .with_client_id_and_secret("id", "secret")
            .with_scope("test-scope")
            .build_token_provider()?;
        let token = provider.token().await?;
        assert_eq!(token.token, "test-access-token");
        Ok(())
    }

    #[tokio::test]
    async fn credentials_cache_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .times(1)
                .respond_with(json_encoded(token_response())),
        );

        let creds = Builder::new("test-apikey")
            .with_url(format!("http://{}", server.addr()))
            .build()?;
        for _ in 0..3 {
            let headers = creds.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer test-access-token"))
            );
        }
        Ok(())
    }

    #[test_case(503, true)]
    #[test_case(429, true)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[tokio::test]
    async fn token_http_error(code: u16, transient: bool) -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(code).body("epic fail")),
        );

        let provider = Builder::new("test-apikey")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider()?;
        let err = provider.token().await.unwrap_err();
        assert_eq!(err.is_transient(), transient, "{err:?}");
        assert!(
            err.source().unwrap().to_string().contains("epic fail"),
            "{err}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn token_malformed_response() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );

        let provider = Builder::new("test-apikey")
            .with_url(format!("http://{}", server.addr()))
            .build_token_provider()?;
        let err = provider.token().await.unwrap_err();
        assert!(!err.is_transient(), "{err:?}");
        Ok(())
    }
}
