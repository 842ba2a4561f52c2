use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::answer::{Answer, MultipleChoiceAnswer};

/// A survey question. The variant decides which answers it accepts.
///
/// Serialized records carry a `kind` tag. Records without one are read as
/// multiple choice when they have a `rightAnswer` (or `rightanswer`) and
/// as freeform otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// Accepts any answer.
    Freeform(FreeformQuestion),
    /// Accepts only one of A, B, C, D.
    MultipleChoice(MultipleChoiceQuestion),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeformQuestion {
    /// Position of the question in the survey.
    pub num: usize,
    pub question: String,
    #[serde(default)]
    pub answer: Option<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    /// Position of the question in the survey.
    pub num: usize,
    pub question: String,
    #[serde(default)]
    pub answer: Option<MultipleChoiceAnswer>,
    #[serde(alias = "rightanswer")]
    pub right_answer: MultipleChoiceAnswer,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum QuestionKind {
    Freeform,
    MultipleChoice,
}

/// Any question record found in a questions file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionRecord {
    kind: Option<QuestionKind>,
    #[serde(default)]
    num: usize,
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: Option<Answer>,
    #[serde(default, alias = "rightanswer")]
    right_answer: Option<MultipleChoiceAnswer>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = String;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.unwrap_or(match record.right_answer {
            Some(_) => QuestionKind::MultipleChoice,
            None => QuestionKind::Freeform,
        });

        match kind {
            QuestionKind::Freeform => Ok(Question::Freeform(FreeformQuestion {
                num: record.num,
                question: record.question,
                answer: record.answer,
            })),
            QuestionKind::MultipleChoice => {
                let right_answer = record.right_answer.ok_or_else(|| {
                    format!("multiple choice question {} has no rightAnswer", record.num)
                })?;
                let answer = match record.answer {
                    None => None,
                    Some(answer) => Some(answer.as_choice().ok_or_else(|| {
                        format!(
                            "multiple choice question {} has answer {}, expected A, B, C or D",
                            record.num, answer
                        )
                    })?),
                };

                Ok(Question::MultipleChoice(MultipleChoiceQuestion {
                    num: record.num,
                    question: record.question,
                    answer,
                    right_answer,
                }))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = QuestionRecord::deserialize(deserializer)?;
        Question::try_from(record).map_err(de::Error::custom)
    }
}

impl MultipleChoiceQuestion {
    /// Whether the recorded answer matches the right answer.
    /// An unanswered question is never correct.
    pub fn is_correct(&self) -> bool {
        self.answer == Some(self.right_answer)
    }
}

impl Question {
    pub fn freeform(num: usize, question: impl Into<String>) -> Self {
        Question::Freeform(FreeformQuestion {
            num,
            question: question.into(),
            answer: None,
        })
    }

    pub fn multiple_choice(
        num: usize,
        question: impl Into<String>,
        right_answer: MultipleChoiceAnswer,
    ) -> Self {
        Question::MultipleChoice(MultipleChoiceQuestion {
            num,
            question: question.into(),
            answer: None,
            right_answer,
        })
    }

    pub fn num(&self) -> usize {
        match self {
            Question::Freeform(q) => q.num,
            Question::MultipleChoice(q) => q.num,
        }
    }

    /// The prompt shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Question::Freeform(q) => &q.question,
            Question::MultipleChoice(q) => &q.question,
        }
    }

    pub fn answer(&self) -> Option<Answer> {
        match self {
            Question::Freeform(q) => q.answer.clone(),
            Question::MultipleChoice(q) => q.answer.map(Answer::Choice),
        }
    }

    pub fn right_answer(&self) -> Option<MultipleChoiceAnswer> {
        match self {
            Question::Freeform(_) => None,
            Question::MultipleChoice(q) => Some(q.right_answer),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Question::MultipleChoice(_))
    }

    pub fn is_answered(&self) -> bool {
        match self {
            Question::Freeform(q) => q.answer.is_some(),
            Question::MultipleChoice(q) => q.answer.is_some(),
        }
    }
}
