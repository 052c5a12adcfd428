use super::Command;
use crate::{Category, Item, ItemCollection, ItemId};

/// Append a new unchecked item in category 1
///
/// The caller supplies an id that is not already present.
pub struct InsertItem {
    pub id: ItemId,
    pub text: String,
}

impl Command for InsertItem {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        debug_assert!(!items.contains(self.id), "duplicate item id {}", self.id);
        items.appended(Item::new(self.id, self.text.clone()))
    }

    fn description(&self) -> String {
        format!("Insert item {}: '{}'", self.id, self.text)
    }
}

/// Remove an item, keeping the order of the rest
pub struct RemoveItem {
    pub id: ItemId,
}

impl Command for RemoveItem {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        items.without(self.id)
    }

    fn description(&self) -> String {
        format!("Remove item {}", self.id)
    }
}

/// Flip the completion flag of an item
pub struct ToggleItem {
    pub id: ItemId,
}

impl Command for ToggleItem {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        items.updated(self.id, Item::toggled)
    }

    fn description(&self) -> String {
        format!("Toggle item {}", self.id)
    }
}

/// Replace the text of an item
pub struct EditItem {
    pub id: ItemId,
    pub text: String,
}

impl Command for EditItem {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        items.updated(self.id, |item| item.with_text(&self.text))
    }

    fn description(&self) -> String {
        format!("Edit item {}: '{}'", self.id, self.text)
    }
}

/// Set the category of an item to the supplied value
pub struct RecategorizeItem {
    pub id: ItemId,
    pub category: Category,
}

impl Command for RecategorizeItem {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        items.updated(self.id, |item| item.with_category(self.category))
    }

    fn description(&self) -> String {
        format!("Recategorize item {} to {}", self.id, self.category)
    }
}

/// A command kind nobody knows how to apply; leaves the collection alone
pub struct UnrecognizedCommand {
    pub kind: String,
}

impl Command for UnrecognizedCommand {
    fn apply(&self, items: &ItemCollection) -> ItemCollection {
        items.clone()
    }

    fn description(&self) -> String {
        format!("Unrecognized command '{}'", self.kind)
    }
}
