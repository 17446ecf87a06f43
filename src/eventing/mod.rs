//! Eventing - Intents flowing from views into the stores

pub mod app_event;
