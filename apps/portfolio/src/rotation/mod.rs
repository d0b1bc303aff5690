// Slideshow rotation: a pure wrap-around index. The timer lives in the
// rendered page (see `site::pages::AutoAdvance`), so nothing here runs on its own.

pub mod index;

pub use index::RotatingIndex;
