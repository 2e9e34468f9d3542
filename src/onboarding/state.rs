//! Onboarding state machine — tracks where the wizard is.

use serde::{Deserialize, Serialize};

/// States of the onboarding wizard.
///
/// `Init → Submitting → AwaitingInput ⇄ Submitting → Complete`.
/// A failed request returns to `AwaitingInput` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowState {
    /// Nothing requested yet (first load or after a restart).
    #[default]
    Init,
    /// A prompt (or an error) is shown and input is enabled.
    AwaitingInput,
    /// Exactly one request is in flight; input is disabled.
    Submitting,
    /// The server reported `done`. Terminal.
    Complete,
}

impl FlowState {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: FlowState) -> bool {
        use FlowState::*;
        matches!(
            (self, target),
            (Init, Submitting)
                | (AwaitingInput, Submitting)
                | (Submitting, AwaitingInput)
                | (Submitting, Complete)
        )
    }

    /// Whether this state is terminal (onboarding is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Whether the user may submit input in this state.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingInput)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Init => "init",
            Self::AwaitingInput => "awaiting_input",
            Self::Submitting => "submitting",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}
