//! Persisting a generated project to disk.

mod write;

pub use write::{validate_relative_path, write_project, WriteOptions, WriteReport};
