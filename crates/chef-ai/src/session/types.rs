//! Session configuration, handle identity and errors.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{ChatHandle, GenerationSettings, Mode, ProviderError};

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique id of one remote chat handle. Increases monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    pub(crate) fn next() -> Self {
        Self(NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// How long a remote handle lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlePolicy {
    /// One handle for the whole conversation, replaced only on reset.
    #[default]
    Persistent,
    /// A new handle for every send, seeded with the completed history.
    FreshPerCall,
}

/// What a session binds its handles to.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub system_prompt: String,
    pub settings: GenerationSettings,
    pub policy: HandlePolicy,
}

impl SessionConfig {
    pub fn new(system_prompt: impl Into<String>, settings: GenerationSettings) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            settings,
            policy: HandlePolicy::default(),
        }
    }

    /// Config using the system prompt of the named mode.
    pub fn for_mode(mode: &str, settings: GenerationSettings) -> Self {
        Self::new(Mode::parse(mode).system_prompt(), settings)
    }

    pub fn with_policy(mut self, policy: HandlePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SessionError> {
        validate_binding(&self.system_prompt, &self.settings)
    }
}

pub(crate) fn validate_binding(
    system_prompt: &str,
    settings: &GenerationSettings,
) -> Result<(), SessionError> {
    if system_prompt.trim().is_empty() {
        return Err(SessionError::Configuration(
            "system prompt must not be empty".into(),
        ));
    }
    settings
        .validate()
        .map_err(|e| SessionError::Configuration(e.to_string()))
}

/// The handle currently bound to a session.
#[derive(Clone)]
pub(crate) struct ActiveHandle {
    pub(crate) id: HandleId,
    pub(crate) handle: Arc<dyn ChatHandle>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("session not initialized: {0}")]
    Uninitialized(String),

    #[error("generation failed: {0}")]
    Generation(#[from] ProviderError),

    #[error("message must not be empty")]
    EmptyMessage,

    #[error("the conversation was reset before the reply arrived")]
    Superseded,
}

impl From<SessionError> for chef_common::ChefError {
    fn from(err: SessionError) -> Self {
        chef_common::ChefError::Ai(err.to_string())
    }
}

impl SessionError {
    /// Text to show in the transcript, in the assistant's place.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Generation(_) | SessionError::Uninitialized(_) => {
                "Error generating recipe. Please try again."
            }
            SessionError::Configuration(_) => {
                "The recipe assistant is not configured correctly."
            }
            SessionError::EmptyMessage => "Please enter a message.",
            SessionError::Superseded => "That reply arrived after the chat was reset and was discarded.",
        }
    }
}
