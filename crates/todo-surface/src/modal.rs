use todo_core::InputState;

/// Edit modal for a single item.
///
/// `Closed --open(text)--> Open{draft = text}`,
/// `Open --save(text)--> Closed` (yields the text to commit),
/// `Open --cancel--> Closed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditModal {
    #[default]
    Closed,
    Open {
        draft: InputState,
    },
}

impl EditModal {
    /// Open seeded with `initial`. Reopening re-seeds the draft.
    pub fn open(&mut self, initial: &str) {
        *self = EditModal::Open {
            draft: InputState::with_text(initial),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditModal::Open { .. })
    }

    pub fn draft(&self) -> Option<&InputState> {
        match self {
            EditModal::Open { draft } => Some(draft),
            EditModal::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut InputState> {
        match self {
            EditModal::Open { draft } => Some(draft),
            EditModal::Closed => None,
        }
    }

    /// Close and hand back `text` for committing. An empty text is refused
    /// and leaves the modal open; a closed modal ignores the save.
    pub fn save(&mut self, text: String) -> Option<String> {
        if !self.is_open() || text.is_empty() {
            return None;
        }
        *self = EditModal::Closed;
        Some(text)
    }

    /// Save whatever the draft currently holds.
    pub fn save_draft(&mut self) -> Option<String> {
        let text = self.draft()?.as_str().to_string();
        self.save(text)
    }

    /// Discard the draft. Returns false if the modal was already closed.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        *self = EditModal::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let modal = EditModal::default();
        assert!(!modal.is_open());
        assert!(modal.draft().is_none());
    }

    #[test]
    fn test_open_seeds_draft() {
        let mut modal = EditModal::default();
        modal.open("buy milk");
        assert_eq!(modal.draft().map(InputState::as_str), Some("buy milk"));
    }

    #[test]
    fn test_save_closes_and_yields_text() {
        let mut modal = EditModal::default();
        modal.open("buy milk");
        assert_eq!(modal.save("buy bread".to_string()), Some("buy bread".to_string()));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_save_empty_stays_open() {
        let mut modal = EditModal::default();
        modal.open("buy milk");
        assert_eq!(modal.save(String::new()), None);
        assert!(modal.is_open());
    }

    #[test]
    fn test_save_when_closed_is_ignored() {
        let mut modal = EditModal::default();
        assert_eq!(modal.save("text".to_string()), None);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_save_draft_uses_typed_text() {
        let mut modal = EditModal::default();
        modal.open("buy");
        if let Some(draft) = modal.draft_mut() {
            draft.set("buy milk");
        }
        assert_eq!(modal.save_draft(), Some("buy milk".to_string()));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut modal = EditModal::default();
        modal.open("buy milk");
        assert!(modal.cancel());
        assert!(!modal.is_open());
        assert!(!modal.cancel());
    }

    #[test]
    fn test_cycle_can_repeat() {
        let mut modal = EditModal::default();
        modal.open("a");
        modal.cancel();
        modal.open("b");
        assert_eq!(modal.save_draft(), Some("b".to_string()));
        modal.open("c");
        assert!(modal.is_open());
    }
}
