//! App — owns the session and both flows, and routes events to them.

use std::sync::Arc;

use crate::chat::ChatSession;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::events::{Event, EventTable, Handler, ViewKind};
use crate::onboarding::{FlowOutcome, OnboardingFlow, Prompt};
use crate::remote::RemoteService;
use crate::session::{KeyValueStore, Session, SessionStore};
use crate::view::View;

/// Whether the event loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The client application. One instance per process, passed explicitly to
/// whatever feeds it events.
pub struct App {
    remote: Arc<dyn RemoteService>,
    sessions: SessionStore,
    session: Session,
    flow: OnboardingFlow,
    chat: ChatSession,
    view: Arc<dyn View>,
    events: EventTable,
    active: ViewKind,
    check_profile: bool,
}

impl App {
    /// Load (or create) the session and validate the event table.
    pub async fn new(
        config: &ClientConfig,
        remote: Arc<dyn RemoteService>,
        store: Arc<dyn KeyValueStore>,
        view: Arc<dyn View>,
    ) -> Result<Self> {
        let events = EventTable::standard()?;
        let sessions = SessionStore::new(store);
        let session = sessions.load_or_create().await?;

        Ok(Self {
            flow: OnboardingFlow::new(Arc::clone(&remote), sessions.clone(), config.locale),
            chat: ChatSession::new(Arc::clone(&remote), config.locale),
            remote,
            sessions,
            session,
            view,
            events,
            active: ViewKind::Onboarding,
            check_profile: config.check_profile,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_view(&self) -> ViewKind {
        self.active
    }

    pub fn flow(&self) -> &OnboardingFlow {
        &self.flow
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// The onboarding prompt on screen, if the onboarding view is active.
    pub fn current_prompt(&self) -> Option<&Prompt> {
        match self.active {
            ViewKind::Onboarding => self.flow.prompt(),
            ViewKind::Chat => None,
        }
    }

    /// Pick the initial view: chat when onboarding is already done,
    /// otherwise start the wizard.
    pub async fn startup(&mut self) -> Result<ViewKind> {
        if self.session.complete {
            tracing::info!(user_id = %self.session.user_id, "Onboarding already complete");
            self.open_chat();
            return Ok(self.active);
        }

        if self.check_profile {
            match self.remote.profile_status(&self.session.user_id).await {
                Ok(status) if status.has_profile => {
                    tracing::info!(user_id = %self.session.user_id, "Server already has a profile");
                    self.sessions.mark_complete().await?;
                    self.session.complete = true;
                    self.open_chat();
                    return Ok(self.active);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Profile status check failed; starting onboarding");
                }
            }
        }

        let outcome = self.flow.start(&mut self.session, self.view.as_ref()).await?;
        self.after_flow(outcome);
        Ok(self.active)
    }

    /// Route one event through the table.
    pub async fn dispatch(&mut self, event: Event) -> Result<Control> {
        let handler = self.events.handler(self.active, &event);
        tracing::debug!(view = %self.active, event = %event.kind(), ?handler, "Dispatching event");

        let view = Arc::clone(&self.view);
        match (handler, event) {
            (Handler::SubmitStep, Event::Submit(text)) => {
                let outcome = if self.flow.needs_start() {
                    self.flow.start(&mut self.session, view.as_ref()).await?
                } else {
                    self.flow
                        .submit_step(&mut self.session, &text, view.as_ref())
                        .await?
                };
                self.after_flow(outcome);
            }
            (Handler::SelectOption, Event::SelectOption(number)) => {
                let outcome = self
                    .flow
                    .select_option(&mut self.session, number, view.as_ref())
                    .await?;
                self.after_flow(outcome);
            }
            (Handler::StepBack, _) => {
                self.flow.back(&mut self.session, view.as_ref());
            }
            (Handler::SendChat, Event::Submit(text)) => {
                self.chat
                    .send(&self.session.user_id, &text, view.as_ref())
                    .await;
            }
            (Handler::Restart, _) => self.restart().await?,
            (Handler::Quit, _) => return Ok(Control::Quit),
            (handler, event) => {
                tracing::debug!(?handler, ?event, "Event ignored");
            }
        }
        Ok(Control::Continue)
    }

    /// Clear the persisted session and run onboarding from the start.
    async fn restart(&mut self) -> Result<()> {
        self.sessions.reset().await?;
        self.session = self.sessions.load_or_create().await?;
        self.chat.clear();
        self.active = ViewKind::Onboarding;
        tracing::info!(user_id = %self.session.user_id, "Onboarding reset");

        let view = Arc::clone(&self.view);
        let outcome = self.flow.restart(&mut self.session, view.as_ref()).await?;
        self.after_flow(outcome);
        Ok(())
    }

    fn after_flow(&mut self, outcome: FlowOutcome) {
        if outcome == FlowOutcome::Completed {
            self.open_chat();
        }
    }

    fn open_chat(&mut self) {
        if self.active == ViewKind::Chat && !self.chat.messages().is_empty() {
            return;
        }
        self.active = ViewKind::Chat;
        self.view.navigate_to_chat();
        self.chat.welcome(self.view.as_ref());
    }
}
