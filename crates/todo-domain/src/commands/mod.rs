use crate::ItemCollection;

pub mod item_commands;

pub use item_commands::*;

/// A named, parameterized request to transition the item collection.
///
/// Applying a command is pure: it reads the current collection and returns
/// the next one. Commands whose target id is absent return the input value
/// unchanged (same allocation).
pub trait Command: Send + Sync {
    /// Compute the collection that results from this command
    fn apply(&self, items: &ItemCollection) -> ItemCollection;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// The reducer: one command in, one new collection out.
pub fn reduce(items: &ItemCollection, command: &dyn Command) -> ItemCollection {
    tracing::trace!("Reducing: {}", command.description());
    command.apply(items)
}
