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

use crate::Result;
use tokio::time::Instant;

/// An access token and its lifetime.
///
/// IAM credentials exchange an API key for one of these, and send it in the
/// `Authorization` header of each request.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The token value.
    pub token: String,

    /// The token type, typically `Bearer`.
    pub token_type: String,

    /// When the token stops being accepted by the service, or `None` if it
    /// never expires.
    ///
    /// Only meaningful in the process that fetched the token.
    pub expires_at: Option<Instant>,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    // Used by tests in other modules.
    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    #[test]
    fn debug_hides_value() {
        let expires_at = Instant::now() + Duration::from_secs(1800);
        let token = Token {
            token: "secret-access-token".into(),
            token_type: "Bearer".into(),
            expires_at: Some(expires_at),
        };
        let got = format!("{token:?}");
        assert!(!got.contains("secret-access-token"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
        assert!(got.contains("Bearer"), "{got}");
        assert!(got.contains(&format!("{expires_at:?}")), "{got}");
    }
}
