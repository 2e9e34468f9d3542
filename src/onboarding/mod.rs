//! Onboarding wizard — the server-driven question/answer sequence that runs
//! before chat access is granted.
//!
//! The server supplies every prompt and decides when the wizard is done. The
//! client keeps a step counter for the progress indicator and persists the
//! completion flag once.

pub mod flow;
pub mod prompt;
pub mod state;

pub use flow::{FlowOutcome, OnboardingFlow};
pub use prompt::{InputKind, Prompt};
pub use state::FlowState;
