//! Advice resolution with a deterministic floor.
//!
//! The resolver prepares bundled counsel for the dominant category
//! before any network activity. A remote consultation can only upgrade
//! that result, so [`AdviceResolver::resolve`] never fails and never
//! blocks past its deadline.

pub mod fallback;
pub mod gemini;
pub mod prompt;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::config::Config;
use crate::error::AdviceError;
use crate::scoring::ScoreTable;

use self::fallback::fallback_for;
use self::prompt::build_consultation_prompt;

pub use self::gemini::GeminiClient;

/// How long the remote consultation may run before the bundled counsel
/// wins the race.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable consulted first for the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Keyring entry holding the API credential.
pub const API_KEY_KEYRING_ENTRY: &str = "gemini_api_key";

/// Thin wrapper around the OS keyring for credential storage.
pub mod keyring_store {
    const SERVICE: &str = "shixin";

    pub fn get(key: &str) -> Result<Option<String>, Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), Box<dyn std::error::Error>> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The stored API credential: environment first, then keyring.
///
/// Blank values and keyring failures both read as "no credential", so
/// resolution falls back to bundled counsel instead of erroring.
pub fn stored_api_key() -> Option<String> {
    if let Ok(value) = std::env::var(API_KEY_ENV) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }
    match keyring_store::get(API_KEY_KEYRING_ENTRY) {
        Ok(Some(value)) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(error) => {
            debug!(error = %error, "keyring lookup failed");
            None
        }
    }
}

/// The consultation handed back to the caller.
///
/// Deliberately carries no marker of whether the text came from the
/// model or the bundled counsel; callers treat both the same.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceResult {
    pub dominant_category: Category,
    pub scores: ScoreTable,
    pub advice: String,
    pub action_items: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Turns a score table into counsel, remotely when possible.
#[derive(Debug, Clone)]
pub struct AdviceResolver {
    client: Option<GeminiClient>,
    timeout: Duration,
}

impl AdviceResolver {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self {
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// A resolver that never touches the network.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Resolver wired from the stored credential and the configuration.
    ///
    /// Without a credential the resolver comes up offline.
    pub fn from_config(config: &Config) -> Self {
        let client = stored_api_key().map(|key| GeminiClient::from_config(key, &config.advice));
        Self::new(client).with_timeout(Duration::from_secs(config.advice.timeout_secs))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a remote consultation will be attempted.
    pub fn has_remote(&self) -> bool {
        self.client.is_some()
    }

    /// Resolve counsel for a finished quiz.
    ///
    /// Callers normally pass `scores.dominant()`; the resolver trusts
    /// its inputs rather than re-deriving them. Infallible: remote
    /// failure, timeout, or an unusable reply all land on the bundled
    /// counsel for the dominant category.
    pub async fn resolve(&self, scores: ScoreTable, dominant: Category) -> AdviceResult {
        let bundled = fallback_for(dominant);
        let default_result = AdviceResult {
            dominant_category: dominant,
            scores,
            advice: bundled.advice.to_string(),
            action_items: bundled
                .action_items
                .iter()
                .map(|item| item.to_string())
                .collect(),
            generated_at: Utc::now(),
        };

        let Some(client) = &self.client else {
            debug!("no API credential, using bundled counsel");
            return default_result;
        };

        let prompt = build_consultation_prompt(&default_result.scores, dominant);

        // First completion wins. The losing branch is dropped, so a
        // late remote reply is never awaited.
        let payload = match tokio::time::timeout(self.timeout, client.generate(&prompt)).await {
            Ok(Ok(payload)) => payload,
            Ok(Err(error)) => {
                warn!(error = %error, "consultation failed, using bundled counsel");
                return default_result;
            }
            Err(_) => {
                let error = AdviceError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                };
                warn!(error = %error, "consultation failed, using bundled counsel");
                return default_result;
            }
        };

        if payload.advice.trim().is_empty() {
            warn!("consultation returned no advice, using bundled counsel");
            return default_result;
        }

        // Keep the model's advice even when its step list is unusable.
        let action_items = if payload.action_items.is_empty() {
            default_result.action_items.clone()
        } else {
            payload.action_items
        };

        AdviceResult {
            advice: payload.advice,
            action_items,
            generated_at: Utc::now(),
            ..default_result
        }
    }
}
