pub mod editor;
pub mod store;
pub mod types;
