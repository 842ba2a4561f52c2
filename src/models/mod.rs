mod answer;
mod question;

pub use answer::{Answer, MultipleChoiceAnswer};
pub use question::{FreeformQuestion, MultipleChoiceQuestion, Question};
