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

use crate::builder;
use crate::transport::Transport;
use auth::config::ConfigSource;
use auth::credentials::Credentials;
use gax::client_builder::{Error, Result};
use gaxi::http::ReqwestClient;
use gaxi::operation::Dispatcher;
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;

/// The service endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.sql-query.cloud.ibm.com/v2";

/// The name used to look up the client configuration.
pub const DEFAULT_SERVICE_NAME: &str = "sql";

/// Implements a client for the SQL Query API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use sql_query_v2::client::SqlQuery;
/// use auth::credentials::anonymous;
/// let client = SqlQuery::builder()
///     .with_instance_crn("crn:v1:bluemix:public:sql-query:us-south:a/1234:5678::")
///     .with_credentials(anonymous::Builder::new().build())
///     .build()
///     .await?;
/// // use `client` to make requests to SQL Query.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `SqlQuery` use the `with_*` methods in the type returned
/// by [builder()][SqlQuery::builder]. The instance CRN is always required.
/// Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `us-south` endpoint
///   (`https://api.sql-query.cloud.ibm.com/v2`). Applications using instances
///   in other regions may need to override this default. The endpoint can
///   also be set with the `SQL_URL` environment variable.
/// * [with_credentials()]: by default this client resolves the credentials
///   from the `SQL_*` configuration keys, see
///   [auth::credentials::from_config_source]. Applications using
///   custom authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `SqlQuery` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `SqlQuery` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// # Service Description
///
/// SQL Query runs SQL statements over data stored in Cloud Object Storage.
/// Statements are submitted as jobs, which run asynchronously in the
/// service. The results are written to a Cloud Object Storage location.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct SqlQuery {
    inner: Arc<Dispatcher>,
}

impl SqlQuery {
    /// Returns a builder for [SqlQuery].
    ///
    /// # Example
    /// ```
    /// # use sql_query_v2::client::SqlQuery;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = SqlQuery::builder()
    ///     .with_instance_crn("crn:v1:bluemix:public:sql-query:us-south:a/1234:5678::")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns information about the tables registered in the catalog.
    pub fn list_tables(&self) -> builder::ListTables {
        builder::ListTables::new(self.inner.clone())
    }

    /// Returns the columns and type of a table in the catalog.
    pub fn get_table(&self) -> builder::GetTable {
        builder::GetTable::new(self.inner.clone())
    }

    /// Submits a SQL statement for execution.
    pub fn submit_sql_job(&self) -> builder::SubmitSqlJob {
        builder::SubmitSqlJob::new(self.inner.clone())
    }

    /// Returns the most recent jobs of the instance.
    pub fn list_sql_jobs(&self) -> builder::ListSqlJobs {
        builder::ListSqlJobs::new(self.inner.clone())
    }

    /// Returns the full details of a job.
    pub fn get_sql_job(&self) -> builder::GetSqlJob {
        builder::GetSqlJob::new(self.inner.clone())
    }
}

/// A builder for [SqlQuery].
///
/// ```
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample() -> anyhow::Result<()> {
/// let builder = SqlQuery::builder();
/// let client = builder
///     .with_instance_crn("crn:v1:bluemix:public:sql-query:eu-de:a/1234:5678::")
///     .with_endpoint("https://api.sql-query.cloud.ibm.com/v2")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    pub(crate) instance_crn: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) service_name: String,
    pub(crate) default_headers: Vec<(String, String)>,
    pub(crate) config_source: Option<Box<dyn ConfigSource>>,
    pub(crate) tracing: bool,
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            instance_crn: None,
            endpoint: None,
            credentials: None,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            default_headers: Vec::new(),
            config_source: None,
            tracing: false,
            transport: None,
        }
    }

    /// Creates a new client.
    ///
    /// This function does not contact the service.
    ///
    /// # Errors
    ///
    /// Fails with a [configuration][Error::is_configuration] error if the
    /// instance CRN is not set, or if a default header is not valid. Fails
    /// with a [credentials][Error::is_default_credentials] error if no
    /// credentials are set and they cannot be resolved from the
    /// configuration.
    pub async fn build(self) -> Result<SqlQuery> {
        let instance_crn = self
            .instance_crn
            .filter(|crn| !crn.is_empty())
            .ok_or_else(|| Error::configuration("the instance CRN is required"))?;
        let default_headers = to_header_map(&self.default_headers)?;

        let source = match self.config_source {
            Some(source) => Some(source),
            None if self.endpoint.is_none() || self.credentials.is_none() => {
                let source = auth::config::default_source().map_err(|e| {
                    if self.credentials.is_some() {
                        Error::configuration(e)
                    } else {
                        Error::cred(e)
                    }
                })?;
                Some(Box::new(source) as Box<dyn ConfigSource>)
            }
            None => None,
        };

        let endpoint = self.endpoint.or_else(|| {
            source
                .as_ref()
                .and_then(|s| s.get(&auth::config::key(&self.service_name, "URL")))
                .filter(|url| !url.is_empty())
        });
        let credentials = match (self.credentials, source.as_deref()) {
            (Some(credentials), _) => credentials,
            (None, Some(source)) => {
                auth::credentials::from_config_source(&self.service_name, source)
                    .map_err(Error::cred)?
            }
            (None, None) => return Err(Error::cred("no configuration source for credentials")),
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let config = gaxi::options::ClientConfig {
                    endpoint,
                    cred: Some(credentials),
                    tracing: self.tracing,
                };
                let client = ReqwestClient::new(config, DEFAULT_ENDPOINT).await?;
                tracing::debug!(
                    service_name = self.service_name.as_str(),
                    endpoint = client.endpoint(),
                    "created SQL Query client"
                );
                Arc::new(client)
            }
        };

        let dispatcher = Dispatcher::new(transport, &crate::INFO)
            .with_query_parameter("instance_crn", instance_crn)
            .with_default_headers(default_headers);
        Ok(SqlQuery {
            inner: Arc::new(dispatcher),
        })
    }

    /// Sets the CRN of the SQL Query instance.
    ///
    /// This is a required setting. It is sent as the `instance_crn` query
    /// parameter in all requests.
    pub fn with_instance_crn<V: Into<String>>(mut self, v: V) -> Self {
        self.instance_crn = Some(v.into());
        self
    }

    /// Sets the endpoint.
    ///
    /// ```
    /// # use sql_query_v2::client::SqlQuery;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = SqlQuery::builder()
    ///     .with_instance_crn("crn:v1:bluemix:public:sql-query:eu-de:a/1234:5678::")
    ///     .with_endpoint("https://eu-de.sql-query.example.com/v2")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// When set, the configuration sources are not used to resolve
    /// credentials.
    ///
    /// ```
    /// # use sql_query_v2::client::SqlQuery;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use auth::credentials::iam;
    /// let client = SqlQuery::builder()
    ///     .with_instance_crn("crn:v1:bluemix:public:sql-query:us-south:a/1234:5678::")
    ///     .with_credentials(iam::Builder::new("my-api-key").build()?)
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Sets the service name used to look up configuration values.
    ///
    /// The default is `sql`, which reads keys such as `SQL_APIKEY` and
    /// `SQL_URL`.
    pub fn with_service_name<V: Into<String>>(mut self, v: V) -> Self {
        self.service_name = v.into();
        self
    }

    /// Adds a header sent with every request.
    ///
    /// These headers replace the headers set by the client library, and are
    /// replaced by any headers set on a single request.
    pub fn with_default_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets the source used to resolve the credentials and endpoint.
    ///
    /// By default, the client uses [auth::config::default_source].
    pub fn with_config_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.config_source = Some(Box::new(source));
        self
    }

    /// Enables tracing.
    ///
    /// The client emits `tracing` events for each request and response. The
    /// application must install a subscriber to collect them. Tracing can
    /// also be enabled with `SQL_QUERY_RUST_LOGGING=true`.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Replaces the HTTP transport.
    ///
    /// Mostly used in tests. The custom transport is responsible for adding
    /// any authentication headers, the configured credentials and endpoint
    /// are only used by the default transport.
    pub fn with_transport<T: Transport + 'static>(mut self, v: T) -> Self {
        self.transport = Some(Arc::new(v));
        self
    }
}

fn to_header_map(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::configuration)?;
        let value = HeaderValue::from_str(value).map_err(Error::configuration)?;
        map.insert(name, value);
    }
    Ok(map)
}
