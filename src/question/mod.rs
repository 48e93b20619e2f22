//! Survey questions and their authoring
//!
//! This module contains the stored question record, its identifier, and
//! the authoring draft that validates host input before a question is
//! added to the repository.

pub mod draft;
pub mod id;
pub mod record;

pub use draft::{DraftAnswer, DraftError, QuestionDraft};
pub use id::QuestionId;
pub use record::{AnswerEntry, Difficulty, NewQuestion, QuestionFilter, QuestionRecord};
