//! Rendering seam between the flows and whatever draws them.

use crate::chat::ChatMessage;
use crate::onboarding::Prompt;

/// Everything the onboarding and chat flows need to show.
///
/// The terminal implementation lives in [`crate::terminal`]; tests use a
/// recording implementation.
pub trait View: Send + Sync {
    /// Show the loading indicator; input is disabled until `hide_loading`.
    fn show_loading(&self);

    fn hide_loading(&self);

    /// Render a prompt with either free-text or single-choice input.
    fn show_prompt(&self, prompt: &Prompt);

    /// Replace the prompt text with a plain message (used for errors).
    fn show_message(&self, message: &str);

    /// Update the progress indicator to `step` (1-based).
    fn update_progress(&self, step: u32);

    /// Append a message to the chat transcript.
    fn show_chat_message(&self, message: &ChatMessage);

    /// Switch from the onboarding wizard to the chat interface.
    fn navigate_to_chat(&self);
}
