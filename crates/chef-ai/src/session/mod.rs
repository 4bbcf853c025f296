//! Conversation session management.
//!
//! A `ChatSession` owns one dialogue: the local history, the system prompt
//! and generation settings it was configured with, and the remote chat
//! handle those were bound to. Sends append to the history and go through
//! the handle; resets clear the history and bind a fresh handle.

mod chat;
mod manager;
mod types;


pub use manager::ChatSession;
pub use types::{HandleId, HandlePolicy, SessionConfig, SessionError};
