use todo_domain::{Item, ItemCollection, StoreObserver};

/// Prints the whole list to stdout every time the store reports a change.
pub struct ListRenderer;

impl StoreObserver for ListRenderer {
    fn collection_changed(&self, items: &ItemCollection) {
        print!("{}", format_items(items));
    }
}

pub fn format_item(item: &Item) -> String {
    let mark = if item.checked { 'x' } else { ' ' };
    format!("{:>3} [{}] {} (category {})", item.id, mark, item.text, item.category)
}

pub fn format_items(items: &ItemCollection) -> String {
    if items.is_empty() {
        return "(no items)\n".to_string();
    }
    items
        .iter()
        .map(|item| format!("{}\n", format_item(item)))
        .collect()
}
