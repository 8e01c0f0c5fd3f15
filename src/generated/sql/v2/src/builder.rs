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

//! Request builders for [SqlQuery][crate::client::SqlQuery].
//!
//! Each method in the client returns one of these builders. Use the `set_*`
//! methods to initialize the request parameters, the
//! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder] methods to
//! change the per-request options, and then call `send()`.

use crate::model;
use crate::operations;
use gax::options::RequestOptions;
use gax::response::Response;
use gaxi::operation::Dispatcher;
use std::sync::Arc;

/// The request builder for [SqlQuery::list_tables][crate::client::SqlQuery::list_tables] calls.
///
/// # Example
/// ```no_run
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample(client: &SqlQuery) -> anyhow::Result<()> {
/// let response = client.list_tables().send().await?;
/// for table in &response.body().tables {
///     println!("{table}");
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ListTables {
    stub: Arc<Dispatcher>,
    options: RequestOptions,
}

impl ListTables {
    pub(crate) fn new(stub: Arc<Dispatcher>) -> Self {
        Self {
            stub,
            options: RequestOptions::default(),
        }
    }

    /// Sets all the request options, replacing any previously set options.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<Response<model::TableList>> {
        self.stub
            .execute::<(), _>(&operations::LIST_TABLES, &[], None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for ListTables {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [SqlQuery::get_table][crate::client::SqlQuery::get_table] calls.
///
/// # Example
/// ```no_run
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample(client: &SqlQuery) -> anyhow::Result<()> {
/// let response = client.get_table().set_table_name("employees").send().await?;
/// println!("columns={:?}", response.body().columns);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct GetTable {
    stub: Arc<Dispatcher>,
    request: model::GetTableRequest,
    options: RequestOptions,
}

impl GetTable {
    pub(crate) fn new(stub: Arc<Dispatcher>) -> Self {
        Self {
            stub,
            request: model::GetTableRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::GetTableRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the request options, replacing any previously set options.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sets the value of [table_name][model::GetTableRequest::table_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.request.table_name = v.into();
        self
    }

    /// Sends the request.
    ///
    /// Fails with an error where [is_binding()][gax::error::Error::is_binding]
    /// is true, without contacting the service, if the table name is not set.
    pub async fn send(self) -> gax::Result<Response<model::TableInformation>> {
        let params = [("table_name", Some(self.request.table_name.as_str()))];
        self.stub
            .execute::<(), _>(&operations::GET_TABLE, &params, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for GetTable {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [SqlQuery::submit_sql_job][crate::client::SqlQuery::submit_sql_job] calls.
///
/// # Example
/// ```no_run
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample(client: &SqlQuery) -> anyhow::Result<()> {
/// let response = client
///     .submit_sql_job()
///     .set_statement("SELECT * FROM cos://us-geo/sql/employees.parquet STORED AS PARQUET")
///     .set_resultset_target("cos://us-geo/my-bucket/results/")
///     .send()
///     .await?;
/// println!("job_id={}", response.body().job_id);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct SubmitSqlJob {
    stub: Arc<Dispatcher>,
    request: model::SubmitSqlJobRequest,
    options: RequestOptions,
}

impl SubmitSqlJob {
    pub(crate) fn new(stub: Arc<Dispatcher>) -> Self {
        Self {
            stub,
            request: model::SubmitSqlJobRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::SubmitSqlJobRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the request options, replacing any previously set options.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sets the value of [statement][model::SubmitSqlJobRequest::statement].
    ///
    /// This is a **required** field for requests.
    pub fn set_statement<T: Into<String>>(mut self, v: T) -> Self {
        self.request.statement = v.into();
        self
    }

    /// Sets the value of [resultset_target][model::SubmitSqlJobRequest::resultset_target].
    pub fn set_resultset_target<T: Into<String>>(mut self, v: T) -> Self {
        self.request.resultset_target = Some(v.into());
        self
    }

    /// Sets or clears the value of [resultset_target][model::SubmitSqlJobRequest::resultset_target].
    pub fn set_or_clear_resultset_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request.resultset_target = v.map(Into::into);
        self
    }

    /// Sends the request.
    ///
    /// The service returns as soon as the job is queued. Use
    /// [get_sql_job()][crate::client::SqlQuery::get_sql_job] to query its
    /// status.
    pub async fn send(self) -> gax::Result<Response<model::SqlJobInfoShort>> {
        let mut body = self.request;
        // An empty target is the same as no target.
        body.resultset_target = body.resultset_target.filter(|t| !t.is_empty());
        let params = [("statement", Some(body.statement.as_str()))];
        self.stub
            .execute(&operations::SUBMIT_SQL_JOB, &params, Some(&body), self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for SubmitSqlJob {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [SqlQuery::list_sql_jobs][crate::client::SqlQuery::list_sql_jobs] calls.
///
/// # Example
/// ```no_run
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample(client: &SqlQuery) -> anyhow::Result<()> {
/// let response = client.list_sql_jobs().send().await?;
/// for job in &response.body().jobs {
///     println!("{} {}", job.job_id, job.status);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ListSqlJobs {
    stub: Arc<Dispatcher>,
    options: RequestOptions,
}

impl ListSqlJobs {
    pub(crate) fn new(stub: Arc<Dispatcher>) -> Self {
        Self {
            stub,
            options: RequestOptions::default(),
        }
    }

    /// Sets all the request options, replacing any previously set options.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<Response<model::SqlJobInfoList>> {
        self.stub
            .execute::<(), _>(&operations::LIST_SQL_JOBS, &[], None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for ListSqlJobs {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [SqlQuery::get_sql_job][crate::client::SqlQuery::get_sql_job] calls.
///
/// # Example
/// ```no_run
/// # use sql_query_v2::client::SqlQuery;
/// # async fn sample(client: &SqlQuery) -> anyhow::Result<()> {
/// let response = client.get_sql_job().set_job_id("my-job-id").send().await?;
/// let job = response.body();
/// if job.status.is_done() {
///     println!("rows_returned={:?}", job.rows_returned);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct GetSqlJob {
    stub: Arc<Dispatcher>,
    request: model::GetSqlJobRequest,
    options: RequestOptions,
}

impl GetSqlJob {
    pub(crate) fn new(stub: Arc<Dispatcher>) -> Self {
        Self {
            stub,
            request: model::GetSqlJobRequest::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<model::GetSqlJobRequest>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the request options, replacing any previously set options.
    pub fn with_request_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// Sets the value of [job_id][model::GetSqlJobRequest::job_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request.job_id = v.into();
        self
    }

    /// Sends the request.
    pub async fn send(self) -> gax::Result<Response<model::SqlJobInfoFull>> {
        let params = [("job_id", Some(self.request.job_id.as_str()))];
        self.stub
            .execute::<(), _>(&operations::GET_SQL_JOB, &params, None, self.options)
            .await
    }
}

impl gax::options::internal::RequestBuilder for GetSqlJob {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
