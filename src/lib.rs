//! # rust-survey
//!
//! A sequential survey: questions in presentation order, a cursor on the
//! question being answered, and answer recording with multiple choice
//! validation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rust_survey::{MultipleChoiceAnswer, Question, Survey, SurveyError};
//!
//! # async fn run() -> Result<(), SurveyError> {
//! let mut survey = Survey::new();
//! survey.add_question(Question::freeform(0, "What is pi?"));
//! survey.add_question(Question::multiple_choice(1, "Pick C", MultipleChoiceAnswer::C));
//!
//! survey.answer_question(3.1416)?;
//! survey.advance_to_next_question()?;
//! survey.answer_question(MultipleChoiceAnswer::C)?;
//!
//! // Replace everything with questions stored on disk
//! survey.load_questions_from_file("questions.json").await?;
//! # Ok(())
//! # }
//! ```

mod data;
mod models;
mod survey;

use std::io;
use std::path::PathBuf;

pub use data::{
    DEFAULT_QUESTIONS_PATH, FileReader, TokioFileReader, load_questions_from_json,
    parse_questions, read_questions_file,
};
pub use models::{Answer, FreeformQuestion, MultipleChoiceAnswer, MultipleChoiceQuestion, Question};
pub use survey::Survey;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// No question exists at the cursor.
    #[error("No question at position {index}")]
    NotFound { index: usize },

    /// A multiple choice question was given something other than A, B, C or D.
    #[error("This is a multiple choice question (got {answer})")]
    InvalidAnswer { answer: Answer },

    /// The questions file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The questions file is not a valid JSON array of questions.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SurveyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_invalid_answer(&self) -> bool {
        matches!(self, Self::InvalidAnswer { .. })
    }
}
