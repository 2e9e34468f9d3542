//! Declarative event → handler table.
//!
//! Every (view, event) pair is listed exactly once. The table is validated
//! at startup so a missing or doubled binding fails fast instead of silently
//! dropping input.

use crate::error::EventTableError;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Onboarding,
    Chat,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [ViewKind::Onboarding, ViewKind::Chat];
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Onboarding => write!(f, "onboarding"),
            Self::Chat => write!(f, "chat"),
        }
    }
}

/// A user-initiated event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text entered and confirmed (button press or Enter).
    Submit(String),
    Back,
    /// 1-based option number on a choice prompt.
    SelectOption(usize),
    Reset,
    Quit,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Submit(_) => EventKind::Submit,
            Self::Back => EventKind::Back,
            Self::SelectOption(_) => EventKind::SelectOption,
            Self::Reset => EventKind::Reset,
            Self::Quit => EventKind::Quit,
        }
    }
}

/// Payload-free discriminant of [`Event`], used as the table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    Back,
    SelectOption,
    Reset,
    Quit,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Submit,
        EventKind::Back,
        EventKind::SelectOption,
        EventKind::Reset,
        EventKind::Quit,
    ];
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Submit => "submit",
            Self::Back => "back",
            Self::SelectOption => "select_option",
            Self::Reset => "reset",
            Self::Quit => "quit",
        };
        write!(f, "{s}")
    }
}

/// What the app does in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Send the text as the answer to the current onboarding prompt.
    SubmitStep,
    /// Submit the chosen option of the current onboarding prompt.
    SelectOption,
    /// Move the progress indicator back one step.
    StepBack,
    /// Send the text as a chat message.
    SendChat,
    /// Clear the session and start onboarding over.
    Restart,
    Quit,
    /// Bound on purpose to nothing.
    Ignore,
}

/// Validated mapping from (view, event) to handler.
#[derive(Debug, Clone)]
pub struct EventTable {
    entries: Vec<(ViewKind, EventKind, Handler)>,
}

impl EventTable {
    /// Build and validate a table.
    pub fn new(entries: Vec<(ViewKind, EventKind, Handler)>) -> Result<Self, EventTableError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// The bindings used by the client.
    pub fn standard() -> Result<Self, EventTableError> {
        use EventKind as E;
        use Handler as H;
        use ViewKind::*;
        Self::new(vec![
            (Onboarding, E::Submit, H::SubmitStep),
            (Onboarding, E::Back, H::StepBack),
            (Onboarding, E::SelectOption, H::SelectOption),
            (Onboarding, E::Reset, H::Restart),
            (Onboarding, E::Quit, H::Quit),
            (Chat, E::Submit, H::SendChat),
            (Chat, E::Back, H::Ignore),
            (Chat, E::SelectOption, H::Ignore),
            (Chat, E::Reset, H::Restart),
            (Chat, E::Quit, H::Quit),
        ])
    }

    /// Every event kind must have exactly one handler in every view.
    pub fn validate(&self) -> Result<(), EventTableError> {
        for view in ViewKind::ALL {
            for kind in EventKind::ALL {
                let count = self
                    .entries
                    .iter()
                    .filter(|(v, k, _)| *v == view && *k == kind)
                    .count();
                match count {
                    0 => {
                        return Err(EventTableError::Unhandled {
                            view: view.to_string(),
                            event: kind.to_string(),
                        });
                    }
                    1 => {}
                    _ => {
                        return Err(EventTableError::Duplicate {
                            view: view.to_string(),
                            event: kind.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Look up the handler for `event` in `view`.
    pub fn handler(&self, view: ViewKind, event: &Event) -> Handler {
        let kind = event.kind();
        self.entries
            .iter()
            .find(|(v, k, _)| *v == view && *k == kind)
            .map(|(_, _, h)| *h)
            .unwrap_or(Handler::Ignore)
    }
}
