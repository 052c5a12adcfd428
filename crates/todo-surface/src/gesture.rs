//! Serializable user gestures, so a session can be replayed from a script.

use crate::TodoSurface;
use serde::{Deserialize, Serialize};
use todo_core::{TodoError, TodoResult};
use todo_domain::{ItemId, UnrecognizedCommand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gesture {
    Insert {
        text: String,
    },
    Remove {
        id: ItemId,
    },
    Toggle {
        id: ItemId,
    },
    /// Open the modal and save `text` in one step; the modal is closed
    /// again when the save is refused
    Edit {
        id: ItemId,
        text: String,
    },
    EditOpen {
        id: ItemId,
    },
    /// Save `text`, or the modal's draft when absent
    EditSave {
        id: ItemId,
        #[serde(default)]
        text: Option<String>,
    },
    EditCancel {
        id: ItemId,
    },
    Categorize {
        id: ItemId,
    },
    #[serde(other)]
    Unknown,
}

impl Gesture {
    /// Parse a JSON array of gestures.
    pub fn parse_script(json: &str) -> TodoResult<Vec<Gesture>> {
        serde_json::from_str(json).map_err(|e| TodoError::Serialization(e.to_string()))
    }
}

impl TodoSurface {
    /// Route one gesture to the matching surface operation. Returns whether
    /// the item collection changed.
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        tracing::debug!("Gesture: {:?}", gesture);
        match gesture {
            Gesture::Insert { text } => self.submit_insert(text).is_some(),
            Gesture::Remove { id } => self.submit_remove(id),
            Gesture::Toggle { id } => self.submit_toggle(id),
            Gesture::Edit { id, text } => {
                if !self.submit_edit_open(id) {
                    return false;
                }
                let saved = self.submit_edit_save(id, text);
                if !saved {
                    self.submit_edit_cancel(id);
                }
                saved
            }
            Gesture::EditOpen { id } => {
                self.submit_edit_open(id);
                false
            }
            Gesture::EditSave { id, text: Some(text) } => self.submit_edit_save(id, text),
            Gesture::EditSave { id, text: None } => self.submit_edit_save_draft(id),
            Gesture::EditCancel { id } => {
                self.submit_edit_cancel(id);
                false
            }
            Gesture::Categorize { id } => self.submit_recategorize_item(id),
            Gesture::Unknown => self.dispatch(&UnrecognizedCommand {
                kind: "unknown".to_string(),
            }),
        }
    }

    /// Apply gestures in order. Returns how many changed the collection.
    pub fn apply_all(&mut self, gestures: impl IntoIterator<Item = Gesture>) -> usize {
        gestures
            .into_iter()
            .map(|gesture| self.apply(gesture))
            .filter(|changed| *changed)
            .count()
    }
}
