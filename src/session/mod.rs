//! Client-local session: the persisted user id and onboarding flag.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::error::StorageError;

/// Storage keys shared with the web client.
pub mod keys {
    /// Generated user identifier.
    pub const USER_ID: &str = "morvo_user_id";
    /// Set to `"true"` once onboarding has finished.
    pub const ONBOARDING_COMPLETE: &str = "morvo_onboarding_complete";
}

/// Length of the random suffix in generated user ids.
const USER_ID_SUFFIX_LEN: usize = 9;

/// The single piece of client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Correlation key with the remote service.
    pub user_id: String,
    /// 1-based step shown in the progress indicator.
    pub current_step: u32,
    /// Whether onboarding has been completed.
    pub complete: bool,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            current_step: 1,
            complete: false,
        }
    }
}

/// Generate a fresh id of the form `user_<unix-millis>_<base36 suffix>`.
pub fn generate_user_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..USER_ID_SUFFIX_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("user_{}_{}", Utc::now().timestamp_millis(), suffix)
}

/// Loads, creates and clears the persisted session flags.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the session, generating and persisting a user id on first load.
    pub async fn load_or_create(&self) -> Result<Session, StorageError> {
        let user_id = match self.store.get(keys::USER_ID).await? {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                let id = generate_user_id();
                self.store.set(keys::USER_ID, &id).await?;
                tracing::info!(user_id = %id, "Generated new user id");
                id
            }
        };

        let complete = self.is_complete().await?;
        Ok(Session {
            complete,
            ..Session::new(user_id)
        })
    }

    pub async fn is_complete(&self) -> Result<bool, StorageError> {
        Ok(self
            .store
            .get(keys::ONBOARDING_COMPLETE)
            .await?
            .is_some_and(|v| v == "true"))
    }

    /// Persist the onboarding-complete flag.
    pub async fn mark_complete(&self) -> Result<(), StorageError> {
        self.store.set(keys::ONBOARDING_COMPLETE, "true").await
    }

    /// Forget both the user id and the completion flag.
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.store.remove(keys::ONBOARDING_COMPLETE).await?;
        self.store.remove(keys::USER_ID).await
    }
}
