//! Wire types for the onboarding/chat service.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /onboarding/start`.
#[derive(Debug, Clone, Serialize)]
pub struct StartRequest<'a> {
    pub user_id: &'a str,
}

/// Body of `POST /onboarding/step`.
#[derive(Debug, Clone, Serialize)]
pub struct StepRequest<'a> {
    pub user_id: &'a str,
    pub value: &'a str,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub user_id: &'a str,
    pub message: &'a str,
}

/// Server-driven state changes attached to a step response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

/// Response of both onboarding endpoints.
///
/// `start` may omit `done`; `step` may omit `message`. Unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_updates: Option<StateUpdates>,
}

/// `"done": null` reads as not done.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl StepResponse {
    /// The step number the server wants the client to show, if any.
    ///
    /// A zero step is treated as absent so the counter never drops below 1.
    pub fn server_step(&self) -> Option<u32> {
        self.state_updates
            .as_ref()
            .and_then(|u| u.step)
            .filter(|step| *step >= 1)
    }

    /// Options to offer, or `None` when the prompt expects free text.
    pub fn choices(&self) -> Option<&[String]> {
        self.options.as_deref().filter(|opts| !opts.is_empty())
    }
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Response of `GET /profile/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStatus {
    #[serde(default)]
    pub has_profile: bool,
}
