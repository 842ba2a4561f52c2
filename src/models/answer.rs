use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The four choices a multiple choice question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MultipleChoiceAnswer {
    A,
    B,
    C,
    D,
}

impl MultipleChoiceAnswer {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Ordinal of the choice, `A` is 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MultipleChoiceAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

impl FromStr for MultipleChoiceAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(format!("'{}' is not one of A, B, C, D", other)),
        }
    }
}

/// A user-supplied answer before it is narrowed by the question kind.
///
/// JSON strings always read back as `Text`; a `Choice` is only produced in
/// code or by narrowing with [`Answer::as_choice`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Bool(bool),
    Choice(MultipleChoiceAnswer),
    Text(String),
    /// Arrays, objects and anything else JSON can hold.
    Other(Value),
}

impl<'de> Deserialize<'de> for Answer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let answer = match Value::deserialize(deserializer)? {
            Value::Bool(b) => Answer::Bool(b),
            Value::String(text) => Answer::Text(text),
            Value::Number(n) => match n.as_f64() {
                Some(n) => Answer::Number(n),
                None => Answer::Other(Value::Number(n)),
            },
            other => Answer::Other(other),
        };
        Ok(answer)
    }
}

impl Answer {
    /// Narrows the answer to a multiple choice letter.
    ///
    /// Accepts a choice, the exact letters `"A"` to `"D"`, or a whole
    /// number naming a choice by its ordinal (0 to 3), either as a number
    /// or as text.
    pub fn as_choice(&self) -> Option<MultipleChoiceAnswer> {
        match self {
            Answer::Choice(choice) => Some(*choice),
            Answer::Text(text) => match text.as_str() {
                "0" => Some(MultipleChoiceAnswer::A),
                "1" => Some(MultipleChoiceAnswer::B),
                "2" => Some(MultipleChoiceAnswer::C),
                "3" => Some(MultipleChoiceAnswer::D),
                letter => letter.parse().ok(),
            },
            Answer::Number(n) if n.fract() == 0.0 && *n >= 0.0 => {
                MultipleChoiceAnswer::from_index(*n as usize)
            }
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Bool(b) => write!(f, "{}", b),
            Answer::Choice(choice) => write!(f, "{}", choice),
            Answer::Text(text) => write!(f, "{:?}", text),
            Answer::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for Answer {
    fn from(n: f64) -> Self {
        Answer::Number(n)
    }
}

impl From<f32> for Answer {
    fn from(n: f32) -> Self {
        Answer::Number(f64::from(n))
    }
}

impl From<i32> for Answer {
    fn from(n: i32) -> Self {
        Answer::Number(f64::from(n))
    }
}

impl From<u32> for Answer {
    fn from(n: u32) -> Self {
        Answer::Number(f64::from(n))
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Number(n as f64)
    }
}

impl From<usize> for Answer {
    fn from(n: usize) -> Self {
        Answer::Number(n as f64)
    }
}

impl From<bool> for Answer {
    fn from(b: bool) -> Self {
        Answer::Bool(b)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<MultipleChoiceAnswer> for Answer {
    fn from(choice: MultipleChoiceAnswer) -> Self {
        Answer::Choice(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_are_ordered() {
        assert!(MultipleChoiceAnswer::A < MultipleChoiceAnswer::B);
        assert!(MultipleChoiceAnswer::C < MultipleChoiceAnswer::D);
        assert_eq!(MultipleChoiceAnswer::D.index(), 3);
        assert_eq!(MultipleChoiceAnswer::from_index(2), Some(MultipleChoiceAnswer::C));
        assert_eq!(MultipleChoiceAnswer::from_index(4), None);
    }

    #[test]
    fn test_as_choice() {
        assert_eq!(
            Answer::from(MultipleChoiceAnswer::B).as_choice(),
            Some(MultipleChoiceAnswer::B)
        );
        assert_eq!(Answer::from("D").as_choice(), Some(MultipleChoiceAnswer::D));
        assert_eq!(Answer::from(1).as_choice(), Some(MultipleChoiceAnswer::B));
        assert_eq!(Answer::from("3").as_choice(), Some(MultipleChoiceAnswer::D));

        assert_eq!(Answer::from("d").as_choice(), None);
        assert_eq!(Answer::from("E").as_choice(), None);
        assert_eq!(Answer::from("4").as_choice(), None);
        assert_eq!(Answer::from("01").as_choice(), None);
        assert_eq!(Answer::from("+1").as_choice(), None);
        assert_eq!(Answer::Other(serde_json::json!([0])).as_choice(), None);
        assert_eq!(Answer::from(4).as_choice(), None);
        assert_eq!(Answer::from(-1).as_choice(), None);
        assert_eq!(Answer::from(1.5).as_choice(), None);
        assert_eq!(Answer::from(true).as_choice(), None);
    }

    #[test]
    fn test_answer_deserialization() {
        let answers: Vec<Answer> =
            serde_json::from_str(r#"[3.5, 7, true, "C", "Linux", [1, 2], {"os": "BSD"}]"#)
                .unwrap();
        assert_eq!(answers[0], Answer::Number(3.5));
        assert_eq!(answers[1], Answer::Number(7.0));
        assert_eq!(answers[2], Answer::Bool(true));
        assert_eq!(answers[3], Answer::Text("C".to_string()));
        assert_eq!(answers[4], Answer::Text("Linux".to_string()));
        assert_eq!(answers[5], Answer::Other(serde_json::json!([1, 2])));
        assert_eq!(answers[6], Answer::Other(serde_json::json!({"os": "BSD"})));
    }

    #[test]
    fn test_choice_serializes_as_letter() {
        let json = serde_json::to_string(&Answer::from(MultipleChoiceAnswer::C)).unwrap();
        assert_eq!(json, "\"C\"");
    }
}
