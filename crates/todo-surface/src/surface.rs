//! Interaction surface: turns user gestures into item store commands.
//!
//! The surface owns the store and the id generator, and keeps the UI-only
//! state a front end needs to draw: the text being composed in the insert
//! field, and one edit modal per item. Empty text is never committed: an
//! empty insert is a no-op that consumes no id, and an empty edit save keeps
//! the modal open.

use crate::EditModal;
use std::collections::HashMap;
use std::rc::Rc;
use todo_core::{AppConfig, InputState, TodoResult};
use todo_domain::{
    Category, Command, EditItem, IdGenerator, InsertItem, Item, ItemCollection, ItemId,
    ItemStore, RecategorizeItem, RemoveItem, StoreObserver, SubscriptionId, ToggleItem,
};

pub struct TodoSurface {
    store: ItemStore,
    ids: IdGenerator,
    insert_draft: InputState,
    modals: HashMap<ItemId, EditModal>,
}

impl TodoSurface {
    /// A session seeded with one item (id 1) carrying `seed_text`.
    pub fn new(seed_text: &str) -> Self {
        Self::from_collection(ItemCollection::seeded(seed_text))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.effective_seed_text())
    }

    /// A session over arbitrary initial items; ids continue above the highest.
    /// Fails when two items share an id.
    pub fn with_items(items: Vec<Item>) -> TodoResult<Self> {
        Ok(Self::from_collection(ItemCollection::try_from(items)?))
    }

    fn from_collection(items: ItemCollection) -> Self {
        let ids = IdGenerator::after(&items);
        Self {
            store: ItemStore::new(items),
            ids,
            insert_draft: InputState::new(),
            modals: HashMap::new(),
        }
    }

    pub fn items(&self) -> &ItemCollection {
        self.store.items()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Id the next successful insert will receive, None once ids run out
    pub fn next_id(&self) -> Option<ItemId> {
        self.ids.peek()
    }

    pub fn subscribe(&mut self, observer: Rc<dyn StoreObserver>) -> SubscriptionId {
        self.store.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn insert_draft(&self) -> &InputState {
        &self.insert_draft
    }

    pub fn insert_draft_mut(&mut self) -> &mut InputState {
        &mut self.insert_draft
    }

    /// Insert `draft` as a new item. Returns the new id, or None when the
    /// draft is empty or no id is left to hand out.
    pub fn submit_insert(&mut self, draft: impl Into<String>) -> Option<ItemId> {
        let text = draft.into();
        if text.is_empty() {
            tracing::debug!("Ignoring insert with empty text");
            return None;
        }

        let Some(id) = self.ids.advance() else {
            tracing::debug!("Ignoring insert, item ids exhausted");
            return None;
        };
        self.dispatch(&InsertItem { id, text });
        self.insert_draft.clear();
        Some(id)
    }

    /// Insert whatever the insert field currently holds.
    pub fn submit_insert_draft(&mut self) -> Option<ItemId> {
        let text = self.insert_draft.as_str().to_string();
        self.submit_insert(text)
    }

    pub fn submit_remove(&mut self, id: ItemId) -> bool {
        self.modals.remove(&id);
        self.dispatch(&RemoveItem { id })
    }

    pub fn submit_toggle(&mut self, id: ItemId) -> bool {
        self.dispatch(&ToggleItem { id })
    }

    /// Open the edit modal for `id`, seeded with the item's current text.
    pub fn submit_edit_open(&mut self, id: ItemId) -> bool {
        let Some(item) = self.store.items().get(id) else {
            tracing::debug!("No item {} to edit", id);
            return false;
        };
        let text = item.text.clone();
        self.modals.entry(id).or_default().open(&text);
        true
    }

    pub fn is_edit_open(&self, id: ItemId) -> bool {
        self.modals.get(&id).is_some_and(EditModal::is_open)
    }

    pub fn edit_draft(&self, id: ItemId) -> Option<&InputState> {
        self.modals.get(&id).and_then(EditModal::draft)
    }

    pub fn edit_draft_mut(&mut self, id: ItemId) -> Option<&mut InputState> {
        self.modals.get_mut(&id).and_then(EditModal::draft_mut)
    }

    /// Commit `text` as the item's new text and close its modal.
    pub fn submit_edit_save(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        let Some(modal) = self.modals.get_mut(&id) else {
            return false;
        };
        match modal.save(text.into()) {
            Some(text) => self.dispatch(&EditItem { id, text }),
            None => {
                tracing::debug!("Edit of item {} not saved", id);
                false
            }
        }
    }

    /// Commit the modal's own draft.
    pub fn submit_edit_save_draft(&mut self, id: ItemId) -> bool {
        let Some(text) = self.edit_draft(id).map(|draft| draft.as_str().to_string()) else {
            return false;
        };
        self.submit_edit_save(id, text)
    }

    /// Close the modal without committing anything.
    pub fn submit_edit_cancel(&mut self, id: ItemId) -> bool {
        self.modals.get_mut(&id).is_some_and(EditModal::cancel)
    }

    /// Advance `current` one step around the category cycle and apply it.
    pub fn submit_recategorize(&mut self, id: ItemId, current: Category) -> bool {
        self.dispatch(&RecategorizeItem {
            id,
            category: current.next(),
        })
    }

    /// Advance the item's own category.
    pub fn submit_recategorize_item(&mut self, id: ItemId) -> bool {
        match self.store.items().get(id).map(|item| item.category) {
            Some(current) => self.submit_recategorize(id, current),
            None => false,
        }
    }

    pub(crate) fn dispatch(&mut self, command: &dyn Command) -> bool {
        self.store.dispatch(command)
    }
}
