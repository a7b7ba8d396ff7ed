//! Question repository adapters.
//!
//! - [`InMemoryQuestionRepository`]: process-local store
//! - [`JsonFileQuestionRepository`]: same table, mirrored to a JSON file after each write

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileQuestionRepository;
pub use memory::InMemoryQuestionRepository;
