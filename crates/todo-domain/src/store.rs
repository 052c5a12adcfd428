//! The item store: current collection, reducer dispatch and change notification.
//!
//! Renderers subscribe with a [`StoreObserver`]. After every command that
//! actually changes the collection, each observer is handed the new value in
//! subscription order and may also pull [`ItemStore::items`] at any time.
//! Commands that match nothing produce no notification.

use crate::{reduce, Command, ItemCollection};
use std::rc::Rc;
use todo_core::{LogEntry, Loggable};

#[cfg_attr(test, mockall::automock)]
pub trait StoreObserver {
    /// Called after the collection has been replaced
    fn collection_changed(&self, items: &ItemCollection);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct ItemStore {
    items: ItemCollection,
    observers: Vec<(SubscriptionId, Rc<dyn StoreObserver>)>,
    next_subscription: u64,
    revision: u64,
    logs: Vec<LogEntry>,
}

impl ItemStore {
    pub fn new(items: ItemCollection) -> Self {
        Self {
            items,
            observers: Vec::new(),
            next_subscription: 0,
            revision: 0,
            logs: Vec::new(),
        }
    }

    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Number of accepted commands so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a command. Returns whether the collection changed.
    pub fn dispatch(&mut self, command: &dyn Command) -> bool {
        let description = command.description();
        let next = reduce(&self.items, command);

        if next.ptr_eq(&self.items) {
            tracing::debug!("No change: {}", description);
            return false;
        }

        tracing::debug!("Applied: {}", description);
        self.items = next;
        self.revision += 1;
        self.add_log(description);
        self.notify();
        true
    }

    pub fn subscribe(&mut self, observer: Rc<dyn StoreObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Detach an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.collection_changed(&self.items);
        }
    }
}

impl Loggable for ItemStore {
    fn add_log(&mut self, message: String) {
        self.logs.push(LogEntry::new(message));
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}
