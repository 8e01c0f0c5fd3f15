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

//! The request and response messages for the SQL Query API.

use chrono::{DateTime, Utc};

/// The request message for [SqlQuery::get_table][crate::client::SqlQuery::get_table].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetTableRequest {
    /// The name of the table.
    pub table_name: String,
}

impl GetTableRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [table_name][GetTableRequest::table_name].
    pub fn set_table_name<T: Into<String>>(mut self, v: T) -> Self {
        self.table_name = v.into();
        self
    }
}

/// The request message for [SqlQuery::submit_sql_job][crate::client::SqlQuery::submit_sql_job].
///
/// This is also the body of the request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SubmitSqlJobRequest {
    /// The SQL statement to run.
    pub statement: String,

    /// The Cloud Object Storage location for the results, e.g.,
    /// `cos://us-geo/my-bucket/results/`.
    ///
    /// When unset the statement must contain an `INTO` clause, or the service
    /// uses the default target of the instance.
    pub resultset_target: Option<String>,
}

impl SubmitSqlJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [statement][SubmitSqlJobRequest::statement].
    pub fn set_statement<T: Into<String>>(mut self, v: T) -> Self {
        self.statement = v.into();
        self
    }

    /// Sets the value of [resultset_target][SubmitSqlJobRequest::resultset_target].
    pub fn set_resultset_target<T: Into<String>>(mut self, v: T) -> Self {
        self.resultset_target = Some(v.into());
        self
    }

    /// Sets or clears the value of [resultset_target][SubmitSqlJobRequest::resultset_target].
    pub fn set_or_clear_resultset_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resultset_target = v.map(Into::into);
        self
    }
}

/// The request message for [SqlQuery::get_sql_job][crate::client::SqlQuery::get_sql_job].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetSqlJobRequest {
    /// The id of the job, as returned by `submit_sql_job()` or `list_sql_jobs()`.
    pub job_id: String,
}

impl GetSqlJobRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [job_id][GetSqlJobRequest::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// The status of a SQL job.
///
/// The service may add new values at any time, these are reported as
/// [JobStatus::UnknownValue].
#[derive(Clone, Debug, PartialEq)]
pub enum JobStatus {
    /// The job is waiting for resources.
    Queued,
    /// The job is running.
    Running,
    /// The job completed successfully.
    Completed,
    /// The job failed, see `error` and `error_message` in [SqlJobInfoFull].
    Failed,
    /// Use this variant to handle new values that are not yet known to this library.
    UnknownValue(String),
}

impl JobStatus {
    /// The value of the status on the wire.
    pub fn name(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::UnknownValue(v) => v.as_str(),
        }
    }

    /// Returns true if the job has completed or failed.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl From<&str> for JobStatus {
    fn from(value: &str) -> Self {
        match value {
            "queued" => Self::Queued,
            "running" => Self::Running,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::ser::Serialize for JobStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for JobStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The type of a table in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum TableType {
    Table,
    View,
    /// Use this variant to handle new values that are not yet known to this library.
    UnknownValue(String),
}

impl TableType {
    /// The value of the table type on the wire.
    pub fn name(&self) -> &str {
        match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for TableType {
    fn from(value: &str) -> Self {
        match value {
            "TABLE" => Self::Table,
            "VIEW" => Self::View,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for TableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::ser::Serialize for TableType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for TableType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Abridged information about a SQL job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SqlJobInfoShort {
    /// The id of the job.
    pub job_id: String,
    pub status: JobStatus,
    /// The IBM Cloud user that submitted the job.
    pub user_id: Option<String>,
    pub submit_time: Option<DateTime<Utc>>,
    /// If true, the service has hints to improve the statement.
    pub has_hints: Option<bool>,
}

/// Full information about a SQL job.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SqlJobInfoFull {
    pub job_id: String,
    pub status: JobStatus,
    pub user_id: String,
    pub submit_time: DateTime<Utc>,
    /// The SQL statement of the job.
    pub statement: String,
    /// An identifier for the execution plan of the statement.
    pub plan_id: Option<String>,
    /// The format of the result set, e.g., `csv`, `json` or `parquet`.
    pub resultset_format: Option<String>,
    /// The Cloud Object Storage location of the result set.
    pub resultset_location: Option<String>,
    /// Only set when the job is done.
    pub end_time: Option<DateTime<Utc>>,
    pub rows_returned: Option<i64>,
    pub rows_read: Option<i64>,
    pub bytes_read: Option<i64>,
    pub objects_skipped: Option<i64>,
    pub objects_qualified: Option<i64>,
    /// A short error code, only set for failed jobs.
    pub error: Option<String>,
    pub error_message: Option<String>,
    /// Suggestions to improve the statement.
    pub hints: Option<Vec<String>>,
}

/// The response for [SqlQuery::list_sql_jobs][crate::client::SqlQuery::list_sql_jobs].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SqlJobInfoList {
    #[serde(default)]
    pub jobs: Vec<SqlJobInfoShort>,
}

/// Describes a column in a table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ColumnInformation {
    pub name: String,
    /// The SQL data type of the column.
    #[serde(rename = "type")]
    pub r#type: String,
    pub nullable: Option<bool>,
}

/// Describes a table and its columns.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TableInformation {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: TableType,
    #[serde(default)]
    pub columns: Vec<ColumnInformation>,
}

/// The name and type of a table.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TableMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: TableType,
}

/// The response for [SqlQuery::list_tables][crate::client::SqlQuery::list_tables].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TableList {
    /// The names of the tables.
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub tables_metadata: Vec<TableMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn submit_request_omits_unset_target() -> TestResult {
        let request = SubmitSqlJobRequest::new().set_statement("SELECT 1");
        let got = serde_json::to_value(&request)?;
        assert_eq!(got, json!({"statement": "SELECT 1"}));

        let request = request.set_resultset_target("cos://us-geo/bucket/prefix");
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({"statement": "SELECT 1", "resultset_target": "cos://us-geo/bucket/prefix"})
        );

        let request = request.set_or_clear_resultset_target(None::<String>);
        let got = serde_json::to_value(&request)?;
        assert_eq!(got, json!({"statement": "SELECT 1"}));
        Ok(())
    }

    #[test_case("queued", JobStatus::Queued)]
    #[test_case("running", JobStatus::Running)]
    #[test_case("completed", JobStatus::Completed)]
    #[test_case("failed", JobStatus::Failed)]
    #[test_case("paused", JobStatus::UnknownValue("paused".to_string()))]
    fn job_status(input: &str, want: JobStatus) -> TestResult {
        let got = serde_json::from_value::<JobStatus>(json!(input))?;
        assert_eq!(got, want);
        assert_eq!(got.to_string(), input);
        assert_eq!(serde_json::to_value(&got)?, json!(input));
        Ok(())
    }

    #[test]
    fn job_status_done() {
        assert!(JobStatus::Completed.is_done());
        assert!(JobStatus::Failed.is_done());
        assert!(!JobStatus::Queued.is_done());
        assert!(!JobStatus::Running.is_done());
        assert!(!JobStatus::UnknownValue("paused".into()).is_done());
    }

    #[test_case("TABLE", TableType::Table)]
    #[test_case("VIEW", TableType::View)]
    #[test_case("MATERIALIZED VIEW", TableType::UnknownValue("MATERIALIZED VIEW".to_string()))]
    fn table_type(input: &str, want: TableType) -> TestResult {
        let got = serde_json::from_value::<TableType>(json!(input))?;
        assert_eq!(got, want);
        assert_eq!(got.name(), input);
        Ok(())
    }

    #[test]
    fn job_short() -> TestResult {
        let input = json!({
            "job_id": "job-1",
            "status": "queued",
            "user_id": "user@example.com",
            "submit_time": "2018-10-08T06:00:11.148Z",
            "unknown_field": 42,
        });
        let got = serde_json::from_value::<SqlJobInfoShort>(input)?;
        assert_eq!(got.job_id, "job-1");
        assert_eq!(got.status, JobStatus::Queued);
        assert_eq!(got.user_id.as_deref(), Some("user@example.com"));
        let want = Utc.with_ymd_and_hms(2018, 10, 8, 6, 0, 11).single();
        assert_eq!(
            got.submit_time.map(|t| t.timestamp()),
            want.map(|t| t.timestamp())
        );
        assert_eq!(got.has_hints, None);

        // Unset fields are omitted, not null.
        let value = serde_json::to_value(&got)?;
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("has_hints"), "{value}");
        assert!(!object.contains_key("unknown_field"), "{value}");
        Ok(())
    }

    #[test]
    fn job_short_requires_id() {
        let got = serde_json::from_value::<SqlJobInfoShort>(json!({"status": "queued"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn job_full() -> TestResult {
        let input = json!({
            "job_id": "job-1",
            "status": "failed",
            "user_id": "user@example.com",
            "submit_time": "2018-10-08T06:00:11.148Z",
            "end_time": "2018-10-08T06:01:00Z",
            "statement": "SELECT * FROM cos://us-geo/sql/employees.parquet",
            "resultset_format": "csv",
            "rows_read": 100,
            "bytes_read": 4096,
            "error": "SQL execution failed",
            "error_message": "table not found",
            "hints": ["use partitioned objects"],
        });
        let got = serde_json::from_value::<SqlJobInfoFull>(input)?;
        assert!(got.status.is_done());
        assert_eq!(got.rows_read, Some(100));
        assert_eq!(got.bytes_read, Some(4096));
        assert_eq!(got.rows_returned, None);
        assert_eq!(got.error_message.as_deref(), Some("table not found"));
        assert_eq!(got.hints, Some(vec!["use partitioned objects".to_string()]));
        assert!(got.end_time.is_some_and(|e| e > got.submit_time));
        Ok(())
    }

    #[test]
    fn job_list() -> TestResult {
        let got = serde_json::from_value::<SqlJobInfoList>(json!({}))?;
        assert!(got.jobs.is_empty(), "{got:?}");

        let got = serde_json::from_value::<SqlJobInfoList>(json!({"jobs": [
            {"job_id": "job-1", "status": "completed"},
            {"job_id": "job-2", "status": "running", "has_hints": true},
        ]}))?;
        let ids = got.jobs.iter().map(|j| j.job_id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["job-1", "job-2"]);
        assert_eq!(got.jobs[1].has_hints, Some(true));
        Ok(())
    }

    #[test]
    fn tables() -> TestResult {
        let got = serde_json::from_value::<TableList>(json!({
            "tables": ["employees", "active"],
            "tables_metadata": [
                {"name": "employees", "type": "TABLE"},
                {"name": "active", "type": "VIEW"},
            ],
        }))?;
        assert_eq!(got.tables, vec!["employees", "active"]);
        assert_eq!(
            got.tables_metadata,
            vec![
                TableMetadata {
                    name: "employees".into(),
                    r#type: TableType::Table
                },
                TableMetadata {
                    name: "active".into(),
                    r#type: TableType::View
                },
            ]
        );

        let got = serde_json::from_value::<TableList>(json!({}))?;
        assert_eq!(got, TableList::default());
        Ok(())
    }

    #[test]
    fn table_information() -> TestResult {
        let got = serde_json::from_value::<TableInformation>(json!({
            "name": "employees",
            "type": "TABLE",
            "columns": [
                {"name": "id", "type": "bigint", "nullable": false},
                {"name": "name", "type": "string"},
            ],
        }))?;
        assert_eq!(got.r#type, TableType::Table);
        assert_eq!(
            got.columns,
            vec![
                ColumnInformation {
                    name: "id".into(),
                    r#type: "bigint".into(),
                    nullable: Some(false),
                },
                ColumnInformation {
                    name: "name".into(),
                    r#type: "string".into(),
                    nullable: None,
                },
            ]
        );
        let value = serde_json::to_value(&got.columns[1])?;
        assert_eq!(value, json!({"name": "name", "type": "string"}));
        Ok(())
    }
}
