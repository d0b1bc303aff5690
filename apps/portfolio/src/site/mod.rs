// Server-rendered HTML: embedded minijinja templates and the page contexts fed to them.

mod engine;
pub mod pages;

pub use engine::{MiniJinjaEngine, TemplateEngine};
