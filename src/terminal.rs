//! Terminal front end — stdin/stdout REPL over the app.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{App, Control};
use crate::chat::{ChatMessage, Role};
use crate::error::Result;
use crate::events::Event;
use crate::locale::Locale;
use crate::onboarding::{InputKind, Prompt};
use crate::view::View;

/// Renders the app to stdout; status lines go to stderr.
pub struct TerminalView {
    locale: Locale,
}

impl TerminalView {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl View for TerminalView {
    fn show_loading(&self) {
        eprintln!("⏳ {}", self.locale.loading());
    }

    fn hide_loading(&self) {}

    fn show_prompt(&self, prompt: &Prompt) {
        if let Some(message) = &prompt.message {
            println!("\n{message}\n");
        }
        match &prompt.input {
            InputKind::Choice(options) => {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
            }
            InputKind::FreeText => eprintln!("   {}", self.locale.text_placeholder()),
        }
    }

    fn show_message(&self, message: &str) {
        println!("\n{message}\n");
    }

    fn update_progress(&self, step: u32) {
        eprintln!("   [{step}]");
    }

    fn show_chat_message(&self, message: &ChatMessage) {
        let label = match message.role {
            Role::User => self.locale.user_label(),
            Role::Assistant => self.locale.assistant_label(),
        };
        println!("{label}: {}", message.content);
    }

    fn navigate_to_chat(&self) {
        eprintln!("ℹ️  /reset to start onboarding again, /quit to exit\n");
    }
}

/// Turn one input line into an event.
///
/// `choices` is the number of options on screen, if a choice prompt is
/// shown; a bare number within range then selects that option.
pub fn parse_line(line: &str, choices: Option<usize>) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line {
        "/back" => return Some(Event::Back),
        "/reset" => return Some(Event::Reset),
        "/quit" | "/exit" => return Some(Event::Quit),
        _ => {}
    }

    if let (Some(count), Ok(number)) = (choices, line.parse::<usize>()) {
        if (1..=count).contains(&number) {
            return Some(Event::SelectOption(number));
        }
    }

    Some(Event::Submit(line.to_string()))
}

/// Read stdin line by line and feed events to `app` until quit or EOF.
///
/// Lines are read only between requests, so at most one request is in
/// flight at a time.
pub async fn run(app: &mut App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprint!("> ");
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        let choices = app.current_prompt().and_then(|p| match &p.input {
            InputKind::Choice(options) => Some(options.len()),
            InputKind::FreeText => None,
        });
        let Some(event) = parse_line(&line, choices) else {
            continue;
        };

        if app.dispatch(event).await? == Control::Quit {
            break;
        }
    }
    Ok(())
}
