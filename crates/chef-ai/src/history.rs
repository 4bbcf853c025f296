//! Append-only dialogue history.

use crate::{Role, Turn};

/// Chronological log of user/model turns for one conversation.
///
/// Even length after every completed exchange. A trailing user turn marks a
/// request that is in flight or failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueHistory {
    turns: Vec<Turn>,
}

impl DialogueHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn has_dangling_user_turn(&self) -> bool {
        matches!(self.last(), Some(turn) if turn.role == Role::User)
    }

    /// Even length with no unanswered user turn at the end.
    pub fn is_settled(&self) -> bool {
        self.turns.len() % 2 == 0 && !self.has_dangling_user_turn()
    }

    /// The history minus every user turn that never got a model reply.
    ///
    /// Used as seed context for a new remote handle.
    pub fn completed_exchanges(&self) -> Vec<Turn> {
        let mut out = Vec::with_capacity(self.turns.len());
        for (i, turn) in self.turns.iter().enumerate() {
            let answered = match turn.role {
                Role::User => matches!(self.turns.get(i + 1), Some(next) if next.role == Role::Model),
                Role::Model => true,
            };
            if answered {
                out.push(turn.clone());
            }
        }
        out
    }
}
