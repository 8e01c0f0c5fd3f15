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
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;

/// Tokens are refreshed when they expire within this window.
pub(crate) const REFRESH_SLACK: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The last fetch result, `None` before the first fetch.
    token: Arc<Mutex<Option<Result<Token>>>>,
    // Held while a fetch is running.
    refresh_in_progress: Arc<Mutex<()>>,
    // Wakes the callers waiting on a running fetch.
    refresh_notify: Arc<Notify>,
    inner: Arc<T>,
}

// Returns true if we hold nothing, an error, or a token about to expire.
fn invalid(token: &Option<Result<Token>>) -> bool {
    match token {
        Some(Ok(t)) => t
            .expires_at
            .is_some_and(|e| e <= Instant::now() + REFRESH_SLACK),
        Some(Err(_)) | None => true,
    }
}

// Implemented by hand, deriving `Clone` would require `T: Clone`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            refresh_in_progress: self.refresh_in_progress.clone(),
            refresh_notify: self.refresh_notify.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(None)),
            refresh_in_progress: Arc::new(Mutex::new(())),
            refresh_notify: Arc::new(Notify::new()),
            inner: Arc::new(inner),
        }
    }

    async fn current_token(&self) -> Option<Result<Token>> {
        self.token.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let token = self.current_token().await;
        if let (false, Some(token)) = (invalid(&token), token) {
            return token;
        }

        // Register for the wakeup before checking for a running refresh.
        let notified = self.refresh_notify.notified();
        let mut notified = std::pin::pin!(notified);
        notified.as_mut().enable();

        match self.refresh_in_progress.try_lock() {
            Ok(guard) => {
                // A refresh may have completed since the first check.
                let token = self.current_token().await;
                if let (false, Some(token)) = (invalid(&token), token) {
                    return token;
                }
                let token = self.inner.token().await;
                *self.token.lock().await = Some(token.clone());
                drop(guard);
                self.refresh_notify.notify_waiters();
                return token;
            }
            Err(_) => {
                // Another caller is fetching, wait for its result.
                notified.await;
            }
        }

        match self.current_token().await {
            Some(token) => token,
            None => Err(crate::errors::non_transient_from_msg(
                "the token refresh completed without a result",
            )),
        }
    }
}
