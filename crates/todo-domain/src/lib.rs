pub mod collection;
pub mod commands;
pub mod id_generator;
pub mod item;
pub mod store;

pub use collection::ItemCollection;
pub use commands::{
    reduce, Command, EditItem, InsertItem, RecategorizeItem, RemoveItem, ToggleItem,
    UnrecognizedCommand,
};
pub use id_generator::IdGenerator;
pub use item::{Category, Item, ItemId, SEED_ITEM_ID};
pub use store::{ItemStore, StoreObserver, SubscriptionId};
