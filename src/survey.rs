//! The survey runner.
//!
//! Keeps the questions in presentation order and a cursor pointing at the
//! question the user is currently answering.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::SurveyError;
use crate::data::{
    DEFAULT_QUESTIONS_PATH, FileReader, TokioFileReader, load_questions_from_json,
    read_questions_file,
};
use crate::models::{Answer, Question};

pub struct Survey<R: FileReader = TokioFileReader> {
    questions: Vec<Question>,
    current_question: usize,
    reader: R,
}

impl Survey {
    /// Create an empty survey that loads files from disk.
    pub fn new() -> Self {
        Self::with_reader(TokioFileReader)
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FileReader> Survey<R> {
    /// Create an empty survey that loads files through `reader`.
    pub fn with_reader(reader: R) -> Self {
        Self {
            questions: Vec::new(),
            current_question: 0,
            reader,
        }
    }

    /// Returns the question under the cursor.
    ///
    /// Fails with [`SurveyError::NotFound`] when the survey is empty or the
    /// cursor has moved past the last question.
    pub fn current_question(&self) -> Result<&Question, SurveyError> {
        self.questions
            .get(self.current_question)
            .ok_or(SurveyError::NotFound {
                index: self.current_question,
            })
    }

    pub fn current_question_mut(&mut self) -> Result<&mut Question, SurveyError> {
        let index = self.current_question;
        self.questions
            .get_mut(index)
            .ok_or(SurveyError::NotFound { index })
    }

    /// Moves the cursor forward and returns the question it lands on.
    ///
    /// The cursor moves even when there is no next question, so after a
    /// [`SurveyError::NotFound`] the current question is gone as well.
    pub fn advance_to_next_question(&mut self) -> Result<&Question, SurveyError> {
        self.current_question = self.current_question.saturating_add(1);
        debug!(index = self.current_question, "advanced cursor");

        self.questions
            .get(self.current_question)
            .ok_or(SurveyError::NotFound {
                index: self.current_question,
            })
    }

    /// Zero-based cursor position.
    pub fn current_question_index(&self) -> usize {
        self.current_question
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn all_questions(&self) -> &[Question] {
        &self.questions
    }

    /// The survey's own question list. Edits apply to the survey directly.
    pub fn all_questions_mut(&mut self) -> &mut Vec<Question> {
        &mut self.questions
    }

    pub fn add_question(&mut self, question: Question) {
        debug!(num = question.num(), "adding question");
        self.questions.push(question);
    }

    pub fn add_many_questions<I>(&mut self, questions: I)
    where
        I: IntoIterator<Item = Question>,
    {
        let before = self.questions.len();
        self.questions.extend(questions);
        debug!(added = self.questions.len() - before, "adding questions");
    }

    /// Records `answer` on the current question, replacing any earlier one.
    ///
    /// Does nothing when there is no current question. A multiple choice
    /// question only takes A, B, C or D; anything else is rejected with
    /// [`SurveyError::InvalidAnswer`] and the stored answer is kept.
    pub fn answer_question(&mut self, answer: impl Into<Answer>) -> Result<(), SurveyError> {
        let answer = answer.into();
        let index = self.current_question;

        let Some(question) = self.questions.get_mut(index) else {
            debug!(index, "no current question, ignoring answer");
            return Ok(());
        };

        match question {
            Question::Freeform(q) => q.answer = Some(answer),
            Question::MultipleChoice(q) => match answer.as_choice() {
                Some(choice) => q.answer = Some(choice),
                None => {
                    warn!(num = q.num, %answer, "rejected multiple choice answer");
                    return Err(SurveyError::InvalidAnswer { answer });
                }
            },
        }

        debug!(index, "answered question");
        Ok(())
    }

    /// Returns the text content of the file at `path`.
    pub async fn read_file_information<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<String, SurveyError> {
        read_questions_file(&self.reader, path.as_ref()).await
    }

    /// Replaces every question with the JSON array stored at `path`.
    ///
    /// On failure the current questions are left as they were. The cursor
    /// is never reset, so it may point past the end of a shorter list.
    pub async fn load_questions_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<&[Question], SurveyError> {
        let path = path.as_ref();

        let questions = match load_questions_from_json(&self.reader, path).await {
            Ok(questions) => questions,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load questions");
                return Err(e);
            }
        };

        info!(
            path = %path.display(),
            count = questions.len(),
            "loaded questions"
        );
        self.questions = questions;
        Ok(&self.questions)
    }

    /// Loads `questions.json` from the working directory.
    pub async fn load_default_questions(&mut self) -> Result<&[Question], SurveyError> {
        self.load_questions_from_file(DEFAULT_QUESTIONS_PATH).await
    }
}
