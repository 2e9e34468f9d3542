//! OnboardingFlow — drives the wizard against the remote service.

use std::sync::Arc;

use crate::error::StorageError;
use crate::locale::Locale;
use crate::remote::{RemoteService, StepResponse};
use crate::session::{Session, SessionStore};
use crate::view::View;

use super::prompt::Prompt;
use super::state::FlowState;

/// What a flow operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Nothing happened: empty input, wrong state, or unknown option.
    Ignored,
    /// A new prompt is on screen.
    Prompted,
    /// The request failed; the error message is shown and input is enabled.
    Failed,
    /// The server reported `done`. The caller must navigate to chat.
    Completed,
}

/// Drives the linear onboarding wizard.
///
/// The server decides every prompt and when the wizard ends; the flow only
/// tracks the step counter, renders responses, and detects the terminal one.
pub struct OnboardingFlow {
    remote: Arc<dyn RemoteService>,
    sessions: SessionStore,
    locale: Locale,
    state: FlowState,
    prompt: Option<Prompt>,
}

impl OnboardingFlow {
    pub fn new(remote: Arc<dyn RemoteService>, sessions: SessionStore, locale: Locale) -> Self {
        Self {
            remote,
            sessions,
            locale,
            state: FlowState::Init,
            prompt: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Whether `start` has not yet succeeded, so a submit should re-run it.
    pub fn needs_start(&self) -> bool {
        self.prompt.is_none() && !self.state.is_terminal()
    }

    fn transition(&mut self, target: FlowState) {
        if !self.state.can_transition_to(target) {
            tracing::warn!(from = %self.state, to = %target, "Unexpected onboarding transition");
        }
        self.state = target;
    }

    /// Ask the server for the first prompt.
    pub async fn start(
        &mut self,
        session: &mut Session,
        view: &dyn View,
    ) -> Result<FlowOutcome, StorageError> {
        if !matches!(self.state, FlowState::Init | FlowState::AwaitingInput) {
            return Ok(FlowOutcome::Ignored);
        }

        self.transition(FlowState::Submitting);
        view.show_loading();
        let result = self.remote.start(&session.user_id).await;
        view.hide_loading();

        match result {
            Ok(resp) if resp.done => self.complete(session).await,
            Ok(resp) => {
                session.current_step = 1;
                self.render(&resp, view);
                view.update_progress(session.current_step);
                tracing::info!(user_id = %session.user_id, "Onboarding started");
                Ok(FlowOutcome::Prompted)
            }
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, error = %e, "Error starting onboarding");
                Ok(self.fail(view))
            }
        }
    }

    /// Send the answer to the current prompt.
    pub async fn submit_step(
        &mut self,
        session: &mut Session,
        value: &str,
        view: &dyn View,
    ) -> Result<FlowOutcome, StorageError> {
        let value = value.trim();
        if value.is_empty() || !self.state.accepts_input() {
            return Ok(FlowOutcome::Ignored);
        }

        self.transition(FlowState::Submitting);
        view.show_loading();
        let result = self.remote.step(&session.user_id, value).await;
        view.hide_loading();

        match result {
            Ok(resp) if resp.done => self.complete(session).await,
            Ok(resp) => {
                session.current_step = resp
                    .server_step()
                    .unwrap_or_else(|| session.current_step.saturating_add(1));
                self.render(&resp, view);
                view.update_progress(session.current_step);
                tracing::debug!(
                    user_id = %session.user_id,
                    step = session.current_step,
                    "Onboarding step accepted"
                );
                Ok(FlowOutcome::Prompted)
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %session.user_id,
                    step = session.current_step,
                    error = %e,
                    "Error in onboarding step"
                );
                Ok(self.fail(view))
            }
        }
    }

    /// Submit the `number`-th (1-based) option of the current choice prompt.
    pub async fn select_option(
        &mut self,
        session: &mut Session,
        number: usize,
        view: &dyn View,
    ) -> Result<FlowOutcome, StorageError> {
        let Some(value) = self
            .prompt
            .as_ref()
            .and_then(|p| p.option(number))
            .map(str::to_string)
        else {
            return Ok(FlowOutcome::Ignored);
        };
        self.submit_step(session, &value, view).await
    }

    /// Step the progress indicator back by one.
    ///
    /// Display only: the server is not asked for the previous prompt and the
    /// current prompt stays on screen.
    pub fn back(&mut self, session: &mut Session, view: &dyn View) -> bool {
        if !self.state.accepts_input() || session.current_step <= 1 {
            return false;
        }
        session.current_step -= 1;
        view.update_progress(session.current_step);
        true
    }

    /// Drop all progress and start the wizard from step 1.
    pub async fn restart(
        &mut self,
        session: &mut Session,
        view: &dyn View,
    ) -> Result<FlowOutcome, StorageError> {
        self.state = FlowState::Init;
        self.prompt = None;
        session.current_step = 1;
        session.complete = false;
        view.update_progress(1);
        self.start(session, view).await
    }

    fn render(&mut self, resp: &StepResponse, view: &dyn View) {
        let prompt = Prompt::from_response(resp, self.prompt.as_ref());
        view.show_prompt(&prompt);
        self.prompt = Some(prompt);
        self.transition(FlowState::AwaitingInput);
    }

    fn fail(&mut self, view: &dyn View) -> FlowOutcome {
        view.show_message(self.locale.connection_error());
        // Keep the options visible; they are still selectable.
        if let Some(prompt) = self.prompt.as_ref().filter(|p| p.is_choice()) {
            view.show_prompt(&Prompt {
                message: None,
                input: prompt.input.clone(),
            });
        }
        self.transition(FlowState::AwaitingInput);
        FlowOutcome::Failed
    }

    async fn complete(&mut self, session: &mut Session) -> Result<FlowOutcome, StorageError> {
        self.transition(FlowState::Complete);
        session.complete = true;
        self.sessions.mark_complete().await?;
        tracing::info!(user_id = %session.user_id, step = session.current_step, "Onboarding complete");
        Ok(FlowOutcome::Completed)
    }
}
