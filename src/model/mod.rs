// File: ./src/model/mod.rs
// Aggregates the split model files
pub mod adapter;
pub mod item;
pub mod parser;

pub use item::{Audience, DISPLAY_PATTERN, STORAGE_PATTERN, Task, TaskKind};
pub use parser::parse_timestamp;
