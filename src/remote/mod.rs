//! Remote onboarding/chat service.
//!
//! All content and branching decisions live on the server. The client only
//! sends answers keyed by the user id and renders what comes back.

pub mod http;
pub mod model;

pub use http::HttpRemote;
pub use model::{ChatReply, ProfileStatus, StateUpdates, StepResponse};

use async_trait::async_trait;

use crate::error::RemoteError;

/// The four endpoints the client consumes.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// `POST /onboarding/start`
    async fn start(&self, user_id: &str) -> Result<StepResponse, RemoteError>;

    /// `POST /onboarding/step`
    async fn step(&self, user_id: &str, value: &str) -> Result<StepResponse, RemoteError>;

    /// `POST /chat`
    async fn chat(&self, user_id: &str, message: &str) -> Result<ChatReply, RemoteError>;

    /// `GET /profile/status?user_id=...`
    async fn profile_status(&self, user_id: &str) -> Result<ProfileStatus, RemoteError>;
}
