pub mod experience;
pub mod profile;
pub mod project;
