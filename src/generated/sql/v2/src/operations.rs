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

//! The operations of the SQL Query API.

use gaxi::operation::Operation;
use http::Method;

pub(crate) static LIST_TABLES: Operation = Operation {
    id: "listTables",
    method: Method::GET,
    path: "/tables",
    required: &[],
    has_body: false,
};

pub(crate) static GET_TABLE: Operation = Operation {
    id: "getTable",
    method: Method::GET,
    path: "/tables/{table_name}",
    required: &["table_name"],
    has_body: false,
};

pub(crate) static SUBMIT_SQL_JOB: Operation = Operation {
    id: "submitSqlJob",
    method: Method::POST,
    path: "/sql_jobs",
    required: &["statement"],
    has_body: true,
};

pub(crate) static LIST_SQL_JOBS: Operation = Operation {
    id: "listSqlJobs",
    method: Method::GET,
    path: "/sql_jobs",
    required: &[],
    has_body: false,
};

pub(crate) static GET_SQL_JOB: Operation = Operation {
    id: "getSqlJob",
    method: Method::GET,
    path: "/sql_jobs/{job_id}",
    required: &["job_id"],
    has_body: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&LIST_TABLES, Method::GET, "/tables")]
    #[test_case(&GET_TABLE, Method::GET, "/tables/{table_name}")]
    #[test_case(&SUBMIT_SQL_JOB, Method::POST, "/sql_jobs")]
    #[test_case(&LIST_SQL_JOBS, Method::GET, "/sql_jobs")]
    #[test_case(&GET_SQL_JOB, Method::GET, "/sql_jobs/{job_id}")]
    fn descriptors(op: &Operation, method: Method, path: &str) {
        assert_eq!(op.method, method, "{op:?}");
        assert_eq!(op.path, path, "{op:?}");
        // Only requests with a method that carries content send a body.
        assert_eq!(op.has_body, op.method == Method::POST, "{op:?}");
        for name in op.required {
            let placeholder = format!("{{{name}}}");
            assert!(op.path.contains(&placeholder) || op.has_body, "{op:?}");
        }
    }
}
