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

/// A failure to bind the request parameters into a request [URI].
///
/// Parameters used to build the request path (aka 'path parameters') and some
/// fields in the request body are required. The client library detects the
/// missing parameters before making the request, and reports all of them in
/// a single error.
///
/// # Example
/// ```
/// # use sql_query_gax::error::binding::BindingError;
/// let error = BindingError::unset(["statement"]);
/// assert!(error.to_string().contains("statement"));
/// assert!(error.field_names().eq(["statement"]));
/// ```
///
/// [uri]: https://clouddocs.f5.com/api/irules/HTTP__uri.html
#[derive(thiserror::Error, Debug, PartialEq)]
pub struct BindingError {
    /// The missing or empty fields.
    pub subs: Vec<SubstitutionMismatch>,
}

impl BindingError {
    /// Creates an error where all the given fields are unset.
    pub fn unset<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let subs = names
            .into_iter()
            .map(|field_name| SubstitutionMismatch {
                field_name,
                problem: SubstitutionFail::Unset,
            })
            .collect();
        Self { subs }
    }

    /// The names of the fields that could not be substituted.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subs.iter().map(|s| s.field_name)
    }
}

/// Ways substituting a variable from a request into a [URI] can fail.
///
/// [uri]: https://clouddocs.f5.com/api/irules/HTTP__uri.html
#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum SubstitutionFail {
    /// A required field was not set
    Unset,
    /// A required field was set to the empty string
    Empty,
}

/// A failure to substitute a variable from a request into a [URI].
///
/// [uri]: https://clouddocs.f5.com/api/irules/HTTP__uri.html
#[derive(Debug, PartialEq)]
pub struct SubstitutionMismatch {
    /// The name of the field that was not substituted.
    pub field_name: &'static str,
    /// Why the substitution failed.
    pub problem: SubstitutionFail,
}

impl std::fmt::Display for SubstitutionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            SubstitutionFail::Unset => {
                write!(f, "field `{}` needs to be set", self.field_name)
            }
            SubstitutionFail::Empty => {
                write!(f, "field `{}` cannot be empty", self.field_name)
            }
        }
    }
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing required parameters: ")?;
        for (i, sub) in self.subs.iter().enumerate() {
            if i != 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{sub}")?;
        }
        Ok(())
    }
}
