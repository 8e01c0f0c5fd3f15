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

use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::response::{Parts, Response};
use http::{HeaderMap, Method};

/// A fully bound request, ready to send.
///
/// The path is relative to the service endpoint and already escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// Sends requests to the service.
///
/// The payload of unsuccessful responses must be returned, unmodified, in
/// the error. Successful responses with no content return
/// [serde_json::Value::Null].
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Response<serde_json::Value>>;
}

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let cred = config
            .cred
            .ok_or_else(|| BuilderError::cred("no credentials configured for the client"))?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string())
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_attempt(&self, request: HttpRequest) -> Result<Response<serde_json::Value>> {
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;

        let url = format!("{}{}", self.endpoint, request.path);
        let mut builder = self
            .inner
            .request(request.method.clone(), &url)
            .query(&request.query)
            .headers(request.headers)
            .headers(auth_headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if self.tracing {
            tracing::debug!(method = %request.method, url = url.as_str(), "sending request");
        }
        let response = builder.send().await.map_err(Error::io)?;
        if self.tracing {
            tracing::debug!(
                method = %request.method,
                url = url.as_str(),
                status = %response.status(),
                "received response"
            );
        }
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }

        self::to_http_response(response).await
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<Response<serde_json::Value>> {
        self.request_attempt(request).await
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(|e| Error::transport(parts.headers.clone(), e))?
        .to_bytes();

    Err(Error::http(status_code, parts.headers, body))
}

async fn to_http_response(response: reqwest::Response) -> Result<Response<serde_json::Value>> {
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(|e| Error::transport(parts.headers.clone(), e))?;

    // 204 No Content, and some other successful responses, have no body.
    let response = match body.to_bytes() {
        content if content.is_empty() => serde_json::Value::Null,
        content => serde_json::from_slice(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_status(status).set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::CredentialsProvider;
    use http::HeaderValue;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use test_case::test_case;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self) -> auth::credentials::Result<HeaderMap>;
        }
    }

    fn bearer_credentials() -> Credentials {
        let mut mock = MockCredentials::new();
        mock.expect_headers().returning(|| {
            let mut headers = HeaderMap::new();
            headers.insert(
                http::header::AUTHORIZATION,
                HeaderValue::from_static("Bearer test-token"),
            );
            Ok(headers)
        });
        Credentials::from(mock)
    }

    async fn test_client(endpoint: String) -> gax::client_builder::Result<ReqwestClient> {
        let config = crate::options::ClientConfig {
            endpoint: Some(endpoint),
            cred: Some(bearer_credentials()),
            ..Default::default()
        };
        ReqwestClient::new(config, "https://unused.example.com").await
    }

    fn request(method: Method, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: path.to_string(),
            query: vec![("instance_crn".to_string(), "crn:v1:test".to_string())],
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn new_requires_credentials() {
        let config = crate::options::ClientConfig::default();
        let err = ReqwestClient::new(config, "https://unused.example.com")
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }

    #[tokio::test]
    async fn new_endpoint() -> TestResult {
        let config = crate::options::ClientConfig {
            cred: Some(bearer_credentials()),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, "https://default.example.com/v2/").await?;
        assert_eq!(client.endpoint(), "https://default.example.com/v2");

        let client = test_client("https://override.example.com".to_string()).await?;
        assert_eq!(client.endpoint(), "https://override.example.com");
        Ok(())
    }

    #[tokio::test]
    async fn send_get() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/tables/a%20b"),
                request::query(url_decoded(contains(("instance_crn", "crn:v1:test")))),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::headers(contains(("accept", "application/json"))),
            ])
            .respond_with(json_encoded(json!({"name": "a b"}))),
        );

        let client = test_client(format!("http://{}/v2", server.addr())).await?;
        let mut req = request(Method::GET, "/tables/a%20b");
        req.headers
            .insert("accept", HeaderValue::from_static("application/json"));
        let response = client.send(req).await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.body(), &json!({"name": "a b"}));
        Ok(())
    }

    #[tokio::test]
    async fn send_post_body() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/sql_jobs"),
                request::body(json_decoded(eq(json!({"statement": "SELECT 1"})))),
            ])
            .respond_with(
                status_code(201)
                    .append_header("content-type", "application/json")
                    .body(r#"{"job_id": "job-1", "status": "queued"}"#),
            ),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let mut req = request(Method::POST, "/sql_jobs");
        req.body = Some(json!({"statement": "SELECT 1"}));
        let response = client.send(req).await?;
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(
            response.body(),
            &json!({"job_id": "job-1", "status": "queued"})
        );
        Ok(())
    }

    #[tokio::test]
    async fn send_http_error_keeps_payload() -> TestResult {
        let payload = r#"{"errors":[{"code":"not_found","message":"job not found"}]}"#;
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/sql_jobs/missing"))
                .respond_with(status_code(404).body(payload)),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let err = client
            .send(request(Method::GET, "/sql_jobs/missing"))
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.http_payload(), Some(&bytes::Bytes::from(payload)));
        Ok(())
    }

    #[tokio::test]
    async fn send_authentication_error() -> TestResult {
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .returning(|| Err(auth::errors::CredentialsError::from_msg(false, "fail")));
        let config = crate::options::ClientConfig {
            endpoint: Some("http://127.0.0.1:1".to_string()),
            cred: Some(Credentials::from(mock)),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, "unused").await?;
        let err = client
            .send(request(Method::GET, "/tables"))
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn send_io_error() -> TestResult {
        // Nothing listens on this port, the connection is refused.
        let client = test_client("http://127.0.0.1:1".to_string()).await?;
        let err = client
            .send(request(Method::GET, "/tables"))
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        assert!(response.is_err(), "{response:?}");
        let err = response.err().unwrap();
        assert_eq!(err.http_status_code(), Some(400));
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}", json!({}); "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "", serde_json::Value::Null; "204 with empty content")]
    #[test_case(reqwest::StatusCode::ACCEPTED, "", serde_json::Value::Null; "202 with empty content")]
    async fn client_empty_content(
        code: reqwest::StatusCode,
        content: &str,
        want: serde_json::Value,
    ) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = super::to_http_response(response).await?;
        assert_eq!(response.status(), code);
        assert_eq!(response.into_body(), want);
        Ok(())
    }

    #[tokio::test]
    async fn client_bad_json() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, "not json")?;
        let err = super::to_http_response(response).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
