pub mod gesture;
pub mod modal;
pub mod surface;

pub use gesture::Gesture;
pub use modal::EditModal;
pub use surface::TodoSurface;
