//! Fixed user-facing strings.

use std::str::FromStr;

/// Language of the fixed messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Arabic,
    English,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unsupported locale {other:?} (expected ar or en)")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "ar"),
            Self::English => write!(f, "en"),
        }
    }
}

impl Locale {
    /// Shown when an onboarding call fails; the user retries by hand.
    pub fn connection_error(&self) -> &'static str {
        match self {
            Self::Arabic => "عذراً، حدث خطأ في الاتصال. يرجى المحاولة مرة أخرى.",
            Self::English => "Sorry, a connection error occurred. Please try again.",
        }
    }

    /// Shown as an assistant message when a chat message could not be sent.
    pub fn chat_error(&self) -> &'static str {
        match self {
            Self::Arabic => "عذراً، حدث خطأ في إرسال الرسالة. يرجى المحاولة مرة أخرى.",
            Self::English => "Sorry, your message could not be sent. Please try again.",
        }
    }

    /// First assistant message after onboarding completes.
    pub fn chat_welcome(&self) -> &'static str {
        match self {
            Self::Arabic => "مرحباً! تم إكمال التسجيل بنجاح. كيف يمكنني مساعدتك اليوم؟",
            Self::English => "Welcome! Your registration is complete. How can I help you today?",
        }
    }

    pub fn text_placeholder(&self) -> &'static str {
        match self {
            Self::Arabic => "اكتب إجابتك هنا...",
            Self::English => "Type your answer here...",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Self::Arabic => "جاري الإرسال...",
            Self::English => "Sending...",
        }
    }

    /// Label for the user in the chat transcript.
    pub fn user_label(&self) -> &'static str {
        match self {
            Self::Arabic => "أنت",
            Self::English => "You",
        }
    }

    /// Label for the assistant in the chat transcript.
    pub fn assistant_label(&self) -> &'static str {
        match self {
            Self::Arabic => "م",
            Self::English => "Morvo",
        }
    }
}
