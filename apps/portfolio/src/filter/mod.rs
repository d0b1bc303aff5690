// Tag filter engine behind the project gallery.
// Pure functions over compiled-in data; nothing here can fail.

pub mod engine;
pub mod selection;

pub use engine::{FacetView, TagChip, Tagged};
pub use selection::Selection;
