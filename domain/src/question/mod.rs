//! Question domain.
//!
//! - [`entities::Question`]: a stored question record
//! - [`entities::NewQuestion`]: the payload for inserting a question
//! - [`entities::QuestionPatch`]: a partial update with explicit presence per field

pub mod entities;
