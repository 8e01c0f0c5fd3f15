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

//! Named configuration sources.
//!
//! Credentials and service endpoints may be configured outside the
//! application, using keys of the form `<SERVICE_NAME>_<PROPERTY>`. For
//! example, the IAM API key for the `sql` service is found under the
//! `SQL_APIKEY` key.
//!
//! The [default_source] function returns the sources used by the clients
//! when the application does not provide its own:
//!
//! 1. A credentials file, if one is found. See [CredentialsFile::find].
//! 2. The process environment.
//!
//! # Example
//! ```
//! # use sql_query_auth::config::{Chain, ConfigSource, Environment};
//! # use std::collections::HashMap;
//! let overrides = HashMap::from([("SQL_AUTH_TYPE".to_string(), "noauth".to_string())]);
//! let source = Chain::new().with_source(overrides).with_source(Environment);
//! assert_eq!(source.get("SQL_AUTH_TYPE").as_deref(), Some("noauth"));
//! ```

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The environment variable naming an explicit credentials file.
pub const CREDENTIALS_FILE_VAR: &str = "IBM_CREDENTIALS_FILE";

/// The file name searched in the working and home directories.
pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// Returns the configuration key for `property` of `service_name`.
///
/// The service name is uppercased and any `-` is replaced by `_`.
///
/// ```
/// # use sql_query_auth::config::key;
/// assert_eq!(key("sql-query", "APIKEY"), "SQL_QUERY_APIKEY");
/// ```
pub fn key(service_name: &str, property: &str) -> String {
    format!(
        "{}_{property}",
        service_name.to_ascii_uppercase().replace('-', "_")
    )
}

/// A source of named configuration values.
///
/// Implement this trait to resolve credentials from locations not supported
/// by this crate, such as a secret manager.
pub trait ConfigSource: std::fmt::Debug + Send + Sync {
    /// Returns the value for `key`, if the source has one.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads values from the process environment.
#[derive(Clone, Debug, Default)]
pub struct Environment;

impl ConfigSource for Environment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        T::get(self, key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        T::get(self, key)
    }
}

/// The contents of a credentials file.
///
/// Credentials files contain one `KEY=VALUE` pair per line. Blank lines,
/// lines starting with `#`, and lines without a `=` are ignored. Keys and
/// values are trimmed, and a value wrapped in matching single or double quotes
/// loses them.
///
/// ```text
/// # Credentials for the SQL Query service
/// SQL_AUTH_TYPE=iam
/// SQL_APIKEY=my-api-key
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsFile {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl CredentialsFile {
    /// Loads and parses the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(BuilderError::loading)?;
        let contents = String::from_utf8(contents).map_err(BuilderError::parsing)?;
        let values = parse(&contents);
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// The path this file was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Finds the credentials file for this process.
    ///
    /// The search order is:
    ///
    /// 1. The path in the `IBM_CREDENTIALS_FILE` environment variable. This
    ///    path is returned even if the file does not exist.
    /// 2. `ibm-credentials.env` in the current working directory.
    /// 3. `ibm-credentials.env` in the home directory.
    pub fn find() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CREDENTIALS_FILE_VAR) {
            return Some(PathBuf::from(path));
        }
        let cwd = std::env::current_dir()
            .ok()
            .map(|d| d.join(CREDENTIALS_FILE_NAME));
        let home = home_dir().map(|d| d.join(CREDENTIALS_FILE_NAME));
        [cwd, home].into_iter().flatten().find(|p| p.is_file())
    }
}

impl ConfigSource for CredentialsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = "USERPROFILE";
    #[cfg(not(target_os = "windows"))]
    let var = "HOME";
    std::env::var_os(var).map(PathBuf::from)
}

fn parse(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            tracing::debug!(
                "skipping line {} in credentials file, not a KEY=VALUE pair",
                number + 1
            );
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::debug!(
                "skipping line {} in credentials file, empty key",
                number + 1
            );
            continue;
        }
        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    values
}

// Removes one pair of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Queries several sources in order.
///
/// Each key is resolved independently: the first source with a value for a
/// key wins, even if a later source has values for related keys.
#[derive(Debug, Default)]
pub struct Chain {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `source`, it is consulted after all the existing sources.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl ConfigSource for Chain {
    fn get(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|s| s.get(key))
    }
}

/// Returns the configuration sources used when the application provides none.
///
/// Fails if a credentials file is found but cannot be loaded or parsed.
pub fn default_source() -> BuildResult<Chain> {
    let chain = Chain::new();
    let chain = match CredentialsFile::find() {
        Some(path) => {
            let file = CredentialsFile::load(&path)?;
            tracing::debug!("loaded credentials file {}", path.display());
            chain.with_source(file)
        }
        None => chain,
    };
    Ok(chain.with_source(Environment))
}
