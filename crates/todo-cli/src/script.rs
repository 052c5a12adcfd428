use crate::output::output_list;
use std::path::Path;
use todo_core::TodoResult;
use todo_surface::{Gesture, TodoSurface};

pub fn load_script(path: &Path) -> TodoResult<Vec<Gesture>> {
    let content = std::fs::read_to_string(path)?;
    Gesture::parse_script(&content)
}

/// Replay the script against `surface` and print the final items.
pub fn handle_run(surface: &mut TodoSurface, path: &Path) -> anyhow::Result<()> {
    let gestures = load_script(path)?;
    let total = gestures.len();
    let changed = surface.apply_all(gestures);
    tracing::info!("Replayed {} gestures, {} changed the list", total, changed);

    output_list(surface.items().to_vec())
}
