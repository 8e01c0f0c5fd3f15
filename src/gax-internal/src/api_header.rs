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

//! SDK identification headers.

/// The name of the analytics header sent with each request.
pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// Generated libraries create one static instance of this struct and use it
/// to create the `User-Agent` and analytics header values.
#[derive(Debug, PartialEq)]
pub struct SdkInfo {
    /// The short service name, e.g., `sql`.
    pub service_name: &'static str,
    /// The service API version, e.g., `v2`.
    pub service_version: &'static str,
    /// The version of the client library.
    pub version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl SdkInfo {
    /// Format the `User-Agent` header value.
    pub fn user_agent(&self) -> String {
        format!(
            "sql-query-rust-sdk/{} (lang=rust; rustc={}-{}; gax={}; os={}; arch={})",
            self.version,
            build_info::RUSTC_VERSION,
            build_info::RUSTC_CHANNEL,
            build_info::PKG_VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH,
        )
    }

    /// Format the analytics header value for `operation_id`.
    pub fn analytics_header_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}
