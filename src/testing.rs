//! Stub collaborators shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::chat::ChatMessage;
use crate::error::RemoteError;
use crate::onboarding::Prompt;
use crate::remote::{ChatReply, ProfileStatus, RemoteService, StepResponse};
use crate::view::View;

/// Scripted remote: each endpoint pops its next queued result.
///
/// An exhausted queue yields a `RequestFailed`, which is what the flows see
/// when the network is down.
#[derive(Default)]
pub struct ScriptedRemote {
    starts: Mutex<VecDeque<Result<StepResponse, RemoteError>>>,
    steps: Mutex<VecDeque<Result<StepResponse, RemoteError>>>,
    chats: Mutex<VecDeque<Result<ChatReply, RemoteError>>>,
    profile: Mutex<Option<Result<ProfileStatus, RemoteError>>>,
    /// Every call as `(endpoint, payload)`.
    pub calls: Mutex<Vec<(String, String)>>,
}

pub fn response(json: &str) -> StepResponse {
    serde_json::from_str(json).unwrap()
}

pub fn offline(endpoint: &str) -> RemoteError {
    RemoteError::RequestFailed {
        endpoint: endpoint.to_string(),
        reason: "connection refused".to_string(),
    }
}

impl ScriptedRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(self, result: Result<StepResponse, RemoteError>) -> Self {
        self.starts.lock().unwrap().push_back(result);
        self
    }

    pub fn on_step(self, result: Result<StepResponse, RemoteError>) -> Self {
        self.steps.lock().unwrap().push_back(result);
        self
    }

    pub fn on_chat(self, result: Result<ChatReply, RemoteError>) -> Self {
        self.chats.lock().unwrap().push_back(result);
        self
    }

    pub fn on_profile(self, result: Result<ProfileStatus, RemoteError>) -> Self {
        *self.profile.lock().unwrap() = Some(result);
        self
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == endpoint)
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    fn record(&self, endpoint: &str, payload: &str) {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload.to_string()));
    }
}

#[async_trait]
impl RemoteService for ScriptedRemote {
    async fn start(&self, user_id: &str) -> Result<StepResponse, RemoteError> {
        self.record("start", user_id);
        self.starts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(offline("/onboarding/start")))
    }

    async fn step(&self, _user_id: &str, value: &str) -> Result<StepResponse, RemoteError> {
        self.record("step", value);
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(offline("/onboarding/step")))
    }

    async fn chat(&self, _user_id: &str, message: &str) -> Result<ChatReply, RemoteError> {
        self.record("chat", message);
        self.chats
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(offline("/chat")))
    }

    async fn profile_status(&self, user_id: &str) -> Result<ProfileStatus, RemoteError> {
        self.record("profile", user_id);
        self.profile
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(offline("/profile/status")))
    }
}

/// One rendering call captured by [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Loading,
    Loaded,
    Prompt(Prompt),
    Message(String),
    Progress(u32),
    Chat(String),
    NavigateToChat,
}

#[derive(Default)]
pub struct RecordingView {
    pub rendered: Mutex<Vec<Rendered>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Rendered> {
        std::mem::take(&mut *self.rendered.lock().unwrap())
    }

    fn push(&self, r: Rendered) {
        self.rendered.lock().unwrap().push(r);
    }
}

impl View for RecordingView {
    fn show_loading(&self) {
        self.push(Rendered::Loading);
    }

    fn hide_loading(&self) {
        self.push(Rendered::Loaded);
    }

    fn show_prompt(&self, prompt: &Prompt) {
        self.push(Rendered::Prompt(prompt.clone()));
    }

    fn show_message(&self, message: &str) {
        self.push(Rendered::Message(message.to_string()));
    }

    fn update_progress(&self, step: u32) {
        self.push(Rendered::Progress(step));
    }

    fn show_chat_message(&self, message: &ChatMessage) {
        self.push(Rendered::Chat(message.content.clone()));
    }

    fn navigate_to_chat(&self) {
        self.push(Rendered::NavigateToChat);
    }
}
