//! reqwest-backed implementation of [`RemoteService`].

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::RemoteError;

use super::model::{
    ChatReply, ChatRequest, ProfileStatus, StartRequest, StepRequest, StepResponse,
};
use super::RemoteService;

/// HTTP client for the onboarding/chat service.
pub struct HttpRemote {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRemote {
    /// Create a client for `base_url` with the configured request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RemoteError::RequestFailed {
                endpoint: config.base_url.clone(),
                reason: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, RemoteError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| RemoteError::RequestFailed {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })?;
        decode(path, resp).await
    }
}

/// Reject non-2xx statuses and decode the JSON body.
async fn decode<R: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<R, RemoteError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(RemoteError::BadStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    resp.json::<R>()
        .await
        .map_err(|e| RemoteError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl RemoteService for HttpRemote {
    async fn start(&self, user_id: &str) -> Result<StepResponse, RemoteError> {
        let resp: StepResponse = self
            .post_json("/onboarding/start", &StartRequest { user_id })
            .await?;
        tracing::debug!(user_id, ?resp, "Onboarding start response");
        Ok(resp)
    }

    async fn step(&self, user_id: &str, value: &str) -> Result<StepResponse, RemoteError> {
        let resp: StepResponse = self
            .post_json("/onboarding/step", &StepRequest { user_id, value })
            .await?;
        tracing::debug!(user_id, ?resp, "Onboarding step response");
        Ok(resp)
    }

    async fn chat(&self, user_id: &str, message: &str) -> Result<ChatReply, RemoteError> {
        self.post_json("/chat", &ChatRequest { user_id, message })
            .await
    }

    async fn profile_status(&self, user_id: &str) -> Result<ProfileStatus, RemoteError> {
        let endpoint = "/profile/status";
        let resp = self
            .client
            .get(self.url(endpoint))
            .query(&[("user_id", user_id)])
            .send()
            .await
            .map_err(|e| RemoteError::RequestFailed {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })?;
        decode(endpoint, resp).await
    }
}
