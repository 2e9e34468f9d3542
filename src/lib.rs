//! MORVO client — onboarding wizard and chat over the MORVO HTTP service.

pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod events;
pub mod locale;
pub mod onboarding;
pub mod remote;
pub mod session;
pub mod terminal;
pub mod view;

#[cfg(test)]
mod testing;
