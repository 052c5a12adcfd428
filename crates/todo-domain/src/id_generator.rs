use crate::{ItemCollection, ItemId};

/// Monotonic source of item ids. Never hands out the same id twice; once
/// `ItemId::MAX` has been handed out the generator stays exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<ItemId>,
}

impl IdGenerator {
    pub fn starting_at(next: ItemId) -> Self {
        Self { next: Some(next) }
    }

    /// A generator positioned just above the highest id in `items`.
    /// Exhausted from the start when that id is `ItemId::MAX`.
    pub fn after(items: &ItemCollection) -> Self {
        let next = match items.max_id() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// The id the next insert will receive, if any remain.
    pub fn peek(&self) -> Option<ItemId> {
        self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Hand out the current id and move past it.
    pub fn advance(&mut self) -> Option<ItemId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }
}
