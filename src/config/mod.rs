pub mod builtin_themes;
pub mod loader;
pub mod types;
