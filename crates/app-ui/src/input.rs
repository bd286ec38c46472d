//! Editable text-input state
//!
//! State holder for the destination text field. The text starts out equal
//! to the hint; while it does, the field counts as empty and edits are not
//! forwarded. Committed (non-hint) text changes are emitted to subscribers,
//! which is how the field feeds the search pipeline.

use tokio::sync::{broadcast, watch};

/// Hint-aware editable text state
///
/// # Example
///
/// ```
/// use app_ui::input::EditableInputState;
///
/// let input = EditableInputState::new("Choose Destination");
/// assert!(input.is_hint());
///
/// input.update_text("Mad");
/// assert!(!input.is_hint());
/// assert_eq!(input.text(), "Mad");
/// ```
pub struct EditableInputState {
    hint: String,
    text_tx: watch::Sender<String>,
    changes_tx: broadcast::Sender<String>,
}

impl EditableInputState {
    /// Create input state showing `hint`
    pub fn new(hint: impl Into<String>) -> Self {
        let hint = hint.into();
        let (text_tx, _) = watch::channel(hint.clone());
        let (changes_tx, _) = broadcast::channel(16);
        Self {
            hint,
            text_tx,
            changes_tx,
        }
    }

    /// Current text (the hint counts as text until edited)
    pub fn text(&self) -> String {
        self.text_tx.borrow().clone()
    }

    /// Whether the field still shows its hint
    pub fn is_hint(&self) -> bool {
        *self.text_tx.borrow() == self.hint
    }

    /// Replace the text
    ///
    /// Emits the new text to change subscribers unless it equals the hint.
    pub fn update_text(&self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        self.text_tx.send_replace(new_text.clone());
        if new_text != self.hint {
            let _ = self.changes_tx.send(new_text);
        }
    }

    /// Subscribe to committed (non-hint) text changes
    pub fn subscribe_changes(&self) -> broadcast::Receiver<String> {
        self.changes_tx.subscribe()
    }

    /// Subscribe to the raw text, hint included
    pub fn subscribe_text(&self) -> watch::Receiver<String> {
        self.text_tx.subscribe()
    }
}
