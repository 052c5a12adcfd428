//! Editable text buffer backing the insert field and the edit modal drafts.

/// The text a front end has typed but not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}
