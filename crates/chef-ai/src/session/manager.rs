//! ChatSession struct, handle lifecycle and accessors.

use std::sync::Arc;

use chef_common::ConversationId;
use tokio::sync::Mutex;
use tracing::debug;

use crate::history::DialogueHistory;
use crate::{GenerationSettings, Mode, ModelClient, ProviderError, Turn};

use super::types::{
    validate_binding, ActiveHandle, HandleId, HandlePolicy, SessionConfig, SessionError,
};

/// One conversation with a hosted model.
///
/// Caller-owned; independent sessions share nothing but the client.
/// Methods take `&self`. The state lock is never held while a reply is
/// awaited, so a reset may land while a send is in flight; the late reply
/// is then discarded (see `send_message`).
pub struct ChatSession {
    pub(super) id: ConversationId,
    pub(super) client: Arc<dyn ModelClient>,
    pub(super) state: Mutex<SessionState>,
}

pub(super) struct SessionState {
    pub(super) config: SessionConfig,
    pub(super) history: DialogueHistory,
    pub(super) active: Option<ActiveHandle>,
}

impl ChatSession {
    /// Create an uninitialized session. No handle is opened until
    /// `initialize` or the first `send_message`.
    pub fn new(client: Arc<dyn ModelClient>, config: SessionConfig) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            id: ConversationId::new(),
            client,
            state: Mutex::new(SessionState {
                config,
                history: DialogueHistory::new(),
                active: None,
            }),
        })
    }

    /// Create an uninitialized session using the system prompt of `mode`.
    /// Unknown modes use the general prompt.
    pub fn for_mode(
        client: Arc<dyn ModelClient>,
        mode: &str,
        settings: GenerationSettings,
    ) -> Result<Self, SessionError> {
        Self::new(client, SessionConfig::for_mode(mode, settings))
    }

    /// Open a brand-new handle from the current prompt and settings, seeded
    /// with the completed part of the history.
    pub async fn initialize(&self) -> Result<HandleId, SessionError> {
        let mut state = self.state.lock().await;
        self.open_handle(&mut state)
            .await
            .map_err(|e| SessionError::Configuration(e.to_string()))
    }

    /// Rebind to a new system prompt and settings, then open a new handle.
    /// History is kept. On failure the previous binding and handle stay in
    /// place.
    pub async fn initialize_with(
        &self,
        system_prompt: impl Into<String>,
        settings: GenerationSettings,
    ) -> Result<HandleId, SessionError> {
        let system_prompt = system_prompt.into();
        validate_binding(&system_prompt, &settings)?;

        let mut state = self.state.lock().await;
        self.bind_handle(&mut state, system_prompt, settings)
            .await
            .map_err(|e| SessionError::Configuration(e.to_string()))
    }

    /// Rebind to the system prompt of `mode`, keeping the current settings.
    pub async fn initialize_mode(&self, mode: &str) -> Result<HandleId, SessionError> {
        let settings = self.state.lock().await.config.settings.clone();
        self.initialize_with(Mode::parse(mode).system_prompt(), settings)
            .await
    }

    /// Forget every turn and bind a new handle with the same prompt and
    /// settings. The only way to drop history.
    pub async fn reset_chat(&self) -> Result<HandleId, SessionError> {
        let mut state = self.state.lock().await;
        let cleared = state.history.len();
        state.history.clear();
        state.active = None;

        let id = self
            .open_handle(&mut state)
            .await
            .map_err(|e| SessionError::Configuration(e.to_string()))?;
        debug!(conversation = self.id.short(), cleared, handle = %id, "Chat reset");
        Ok(id)
    }

    pub(super) async fn open_handle(
        &self,
        state: &mut SessionState,
    ) -> Result<HandleId, ProviderError> {
        let system_prompt = state.config.system_prompt.clone();
        let settings = state.config.settings.clone();
        self.bind_handle(state, system_prompt, settings).await
    }

    /// Open a handle for the given prompt and settings. The session's
    /// binding is only replaced once the provider accepts the handle.
    async fn bind_handle(
        &self,
        state: &mut SessionState,
        system_prompt: String,
        settings: GenerationSettings,
    ) -> Result<HandleId, ProviderError> {
        let seed = state.history.completed_exchanges();
        let handle = self
            .client
            .create_session(&system_prompt, &settings, &seed)
            .await?;

        let id = HandleId::next();
        debug!(
            conversation = self.id.short(),
            provider = self.client.provider_name(),
            handle = %id,
            seed_turns = seed.len(),
            "Opened chat handle"
        );
        state.config.system_prompt = system_prompt;
        state.config.settings = settings;
        state.active = Some(ActiveHandle { id, handle });
        Ok(id)
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    /// Snapshot of the dialogue history.
    pub async fn history(&self) -> Vec<Turn> {
        self.state.lock().await.history.turns().to_vec()
    }

    pub async fn history_len(&self) -> usize {
        self.state.lock().await.history.len()
    }

    pub async fn handle_id(&self) -> Option<HandleId> {
        self.state.lock().await.active.as_ref().map(|active| active.id)
    }

    pub async fn is_initialized(&self) -> bool {
        self.state.lock().await.active.is_some()
    }

    pub async fn system_prompt(&self) -> String {
        self.state.lock().await.config.system_prompt.clone()
    }

    pub async fn settings(&self) -> GenerationSettings {
        self.state.lock().await.config.settings.clone()
    }

    pub async fn policy(&self) -> HandlePolicy {
        self.state.lock().await.config.policy
    }
}
