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

//! Declarative operations and the generic request dispatcher.
//!
//! Generated clients describe each operation with a static [Operation] and
//! send all their requests through a single [Dispatcher].

use crate::api_header::{ANALYTICS_HEADER, SdkInfo};
use crate::http::{HttpRequest, Transport};
use crate::path_parameter;
use gax::Result;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use http::{HeaderMap, Method};
use std::sync::Arc;

const APPLICATION_JSON: &str = "application/json";

/// Describes how to bind a request for one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    /// The operation id, as reported in the analytics header.
    pub id: &'static str,
    pub method: Method,
    /// The path relative to the service endpoint, with `{name}` placeholders.
    pub path: &'static str,
    /// The parameters that must be set, and not empty, before sending.
    pub required: &'static [&'static str],
    /// If true, the request carries a JSON body.
    pub has_body: bool,
}

#[derive(Clone, Debug)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    info: &'static SdkInfo,
    query: Vec<(String, String)>,
    default_headers: HeaderMap,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, info: &'static SdkInfo) -> Self {
        Self {
            transport,
            info,
            query: Vec::new(),
            default_headers: HeaderMap::new(),
        }
    }

    /// Adds a query parameter sent with every request.
    pub fn with_query_parameter<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the headers sent with every request.
    ///
    /// These replace any headers set by the client library, and are replaced
    /// by any headers in the [RequestOptions].
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Binds, sends, and decodes one request.
    ///
    /// `params` holds the values for the path placeholders and any other
    /// required parameters. Missing parameters are reported before the
    /// transport is called.
    pub async fn execute<I, O>(
        &self,
        op: &Operation,
        params: &[(&'static str, Option<&str>)],
        body: Option<&I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::Serialize + ?Sized,
        O: serde::de::DeserializeOwned,
    {
        let lookup = |name: &str| {
            params
                .iter()
                .find(|(n, _)| *n == name)
                .and_then(|(_, v)| *v)
        };
        path_parameter::check_required(op.required.iter().map(|name| (*name, lookup(name))))?;

        let bound = params
            .iter()
            .filter_map(|(n, v)| v.map(|v| (*n, v)))
            .collect::<Vec<_>>();
        let path = path_parameter::expand(op.path, &bound);
        let body = body
            .map(|b| serde_json::to_value(b).map_err(Error::ser))
            .transpose()?;
        let request = HttpRequest {
            method: op.method.clone(),
            path,
            query: self.query.clone(),
            headers: self.headers(op, &options)?,
            body,
        };

        let response = self.transport.send(request).await?;
        let (parts, body) = response.into_parts();
        let body = serde_json::from_value::<O>(body).map_err(Error::deser)?;
        Ok(Response::from_parts(parts, body))
    }

    // Client defaults, then library headers, then per-request headers.
    fn headers(&self, op: &Operation, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = self.default_headers.clone();
        headers.insert(USER_AGENT, header_value(&self.info.user_agent())?);
        headers.insert(
            HeaderName::from_static(ANALYTICS_HEADER),
            header_value(&self.info.analytics_header_value(op.id))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if op.has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        if let Some(prefix) = options.user_agent() {
            let value = match headers.get(USER_AGENT).map(|v| v.to_str()) {
                Some(Ok(current)) => format!("{prefix} {current}"),
                _ => prefix.clone(),
            };
            headers.insert(USER_AGENT, header_value(&value)?);
        }
        for (name, value) in options.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::ser)?;
            headers.insert(name, header_value(value)?);
        }
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(Error::ser)
}
