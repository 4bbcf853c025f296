//! Async send for ChatSession.

use tracing::{debug, warn};

use crate::Turn;

use super::manager::ChatSession;
use super::types::{HandlePolicy, SessionError};

impl ChatSession {
    /// Send one user message and return the model's reply.
    ///
    /// The user turn is appended before the request goes out, so a failed
    /// call leaves it behind as a dangling turn. The model turn is appended
    /// only on success. Never retries.
    ///
    /// If the session is reset or re-initialized while the request is in
    /// flight, the reply belongs to a handle that is no longer current: it is
    /// discarded and `SessionError::Superseded` is returned.
    pub async fn send_message(&self, text: &str) -> Result<String, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let issued = {
            let mut state = self.state.lock().await;

            let needs_handle =
                state.active.is_none() || state.config.policy == HandlePolicy::FreshPerCall;
            if needs_handle {
                self.open_handle(&mut state)
                    .await
                    .map_err(|e| SessionError::Uninitialized(e.to_string()))?;
            }

            let Some(active) = state.active.clone() else {
                return Err(SessionError::Uninitialized("no chat handle".into()));
            };
            state.history.push(Turn::user(text));
            active
        };

        debug!(
            conversation = self.id.short(),
            handle = %issued.id,
            chars = text.len(),
            "Sending message"
        );

        let result = issued.handle.send(text).await;

        let mut state = self.state.lock().await;
        let current = state.active.as_ref().map(|active| active.id);
        if current != Some(issued.id) {
            warn!(
                conversation = self.id.short(),
                handle = %issued.id,
                "Discarding reply from superseded chat handle"
            );
            return Err(SessionError::Superseded);
        }

        match result {
            Ok(reply) => {
                debug!(
                    conversation = self.id.short(),
                    chars = reply.len(),
                    "Reply received"
                );
                state.history.push(Turn::model(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                warn!(conversation = self.id.short(), "Generation failed: {e}");
                Err(SessionError::Generation(e))
            }
        }
    }
}
