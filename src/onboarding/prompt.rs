//! What the wizard currently shows.

use crate::remote::StepResponse;

/// How the user answers the current prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    FreeText,
    /// Single choice among server-supplied options.
    Choice(Vec<String>),
}

/// The prompt currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub message: Option<String>,
    pub input: InputKind,
}

impl Prompt {
    /// Build the next prompt from a server response.
    ///
    /// A response without `message` keeps the previous message on screen.
    pub fn from_response(resp: &StepResponse, previous: Option<&Prompt>) -> Self {
        let message = resp
            .message
            .clone()
            .or_else(|| previous.and_then(|p| p.message.clone()));
        let input = match resp.choices() {
            Some(options) => InputKind::Choice(options.to_vec()),
            None => InputKind::FreeText,
        };
        Self { message, input }
    }

    /// Resolve a 1-based option number to its value.
    pub fn option(&self, number: usize) -> Option<&str> {
        match &self.input {
            InputKind::Choice(options) => number
                .checked_sub(1)
                .and_then(|i| options.get(i))
                .map(String::as_str),
            InputKind::FreeText => None,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.input, InputKind::Choice(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> StepResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn options_make_a_choice_prompt() {
        let prompt = Prompt::from_response(&response(r#"{"message":"Q1","options":["a","b"]}"#), None);
        assert_eq!(prompt.message.as_deref(), Some("Q1"));
        assert_eq!(
            prompt.input,
            InputKind::Choice(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn missing_message_keeps_previous() {
        let first = Prompt::from_response(&response(r#"{"message":"Q1"}"#), None);
        let next = Prompt::from_response(&response(r#"{"options":["x"]}"#), Some(&first));
        assert_eq!(next.message.as_deref(), Some("Q1"));
        assert!(next.is_choice());
    }

    #[test]
    fn option_numbers_are_one_based() {
        let prompt = Prompt::from_response(&response(r#"{"options":["a","b"]}"#), None);
        assert_eq!(prompt.option(1), Some("a"));
        assert_eq!(prompt.option(2), Some("b"));
        assert_eq!(prompt.option(0), None);
        assert_eq!(prompt.option(3), None);
    }

    #[test]
    fn free_text_has_no_options() {
        let prompt = Prompt::from_response(&response(r#"{"message":"Q2"}"#), None);
        assert_eq!(prompt.input, InputKind::FreeText);
        assert_eq!(prompt.option(1), None);
    }
}
