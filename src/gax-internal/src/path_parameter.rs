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

//! Handling of required parameters and path templates.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and so are some fields in the request body. All the missing
//! parameters are reported in a single error, before any request is sent.

use gax::error::Error;
use gax::error::binding::{BindingError, SubstitutionFail, SubstitutionMismatch};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// RFC 3986 unreserved characters are not escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Returns an error naming every parameter that is unset or empty.
///
/// # Example
/// ```
/// # use sql_query_gax_internal::path_parameter::check_required;
/// let e = check_required([("job_id", None), ("table_name", Some(""))]).unwrap_err();
/// assert!(e.is_binding());
/// assert!(check_required([("job_id", Some("abc"))]).is_ok());
/// ```
pub fn check_required<'a, I>(params: I) -> gax::Result<()>
where
    I: IntoIterator<Item = (&'static str, Option<&'a str>)>,
{
    let subs = params
        .into_iter()
        .filter_map(|(field_name, value)| {
            let problem = match value {
                None => SubstitutionFail::Unset,
                Some("") => SubstitutionFail::Empty,
                Some(_) => return None,
            };
            Some(SubstitutionMismatch {
                field_name,
                problem,
            })
        })
        .collect::<Vec<_>>();
    if subs.is_empty() {
        return Ok(());
    }
    Err(Error::binding(BindingError { subs }))
}

/// Escapes `value` for use as a single path segment.
///
/// ```
/// # use sql_query_gax_internal::path_parameter::escape;
/// assert_eq!(escape("my table/1"), "my%20table%2F1");
/// ```
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Expands `{name}` placeholders in `template`.
///
/// Each value is escaped exactly once. Placeholders without a value are left
/// unchanged, callers should use [check_required] first.
///
/// ```
/// # use sql_query_gax_internal::path_parameter::expand;
/// let path = expand("/tables/{table_name}", &[("table_name", "a b")]);
/// assert_eq!(path, "/tables/a%20b");
/// ```
pub fn expand(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        path.push_str(&rest[..start]);
        match params.iter().find(|(n, _)| *n == name) {
            Some((_, value)) => path.push_str(&escape(value)),
            None => path.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    path.push_str(rest);
    path
}
