//! Scripted AI assistant.

pub mod model;
pub mod service;

pub use model::{ChatMessage, ChatRole};
pub use service::{Assistant, PREDEFINED_PROMPTS, REPLY_DELAY};
