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

//! SQL Query Client Libraries for Rust - SQL Query API v2
//!
//! This crate contains the client library for the SQL Query API. The service
//! runs SQL statements over data stored in Cloud Object Storage, and keeps a
//! catalog of tables describing that data.
//!
//! # Example
//! ```no_run
//! # use sql_query_v2::client::SqlQuery;
//! # async fn sample() -> anyhow::Result<()> {
//! let client = SqlQuery::builder()
//!     .with_instance_crn("crn:v1:bluemix:public:sql-query:us-south:a/1234:5678::")
//!     .build()
//!     .await?;
//! let job = client
//!     .submit_sql_job()
//!     .set_statement("SELECT * FROM cos://us-geo/sql/employees.parquet STORED AS PARQUET")
//!     .send()
//!     .await?;
//! let job = client
//!     .get_sql_job()
//!     .set_job_id(&job.body().job_id)
//!     .send()
//!     .await?;
//! println!("status={}", job.body().status);
//! # Ok(()) }
//! ```
//!
//! The main types to work with this crate are the client:
//! - [SqlQuery](client::SqlQuery)

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;
pub use gax::response::Response;

/// Request builders.
pub mod builder;

/// Concrete implementations of this client library traits.
pub mod client;

pub mod transport;

pub(crate) mod operations;

pub(crate) static INFO: gaxi::api_header::SdkInfo = gaxi::api_header::SdkInfo {
    service_name: "sql",
    service_version: "v2",
    version: env!("CARGO_PKG_VERSION"),
};

