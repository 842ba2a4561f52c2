use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::SurveyError;
use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Reads the full text of a file.
///
/// [`Survey`](crate::Survey) loads questions through this so tests can
/// swap the file system for an in-memory fake.
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads files from disk with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileReader;

#[async_trait]
impl FileReader for TokioFileReader {
    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

pub fn parse_questions(json: &str) -> serde_json::Result<Vec<Question>> {
    serde_json::from_str(json)
}

pub async fn read_questions_file<R: FileReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<String, SurveyError> {
    reader
        .read_to_string(path)
        .await
        .map_err(|source| SurveyError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads and parses a JSON array of questions.
pub async fn load_questions_from_json<R: FileReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<Vec<Question>, SurveyError> {
    let json_content = read_questions_file(reader, path).await?;
    debug!(path = %path.display(), bytes = json_content.len(), "read questions file");

    parse_questions(&json_content).map_err(|source| SurveyError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::{Answer, MultipleChoiceAnswer};

    #[test]
    fn test_parse_questions() {
        let json = r#"[
            {"kind": "freeform", "num": 0, "question": "Favourite sport?", "answer": null},
            {"kind": "freeform", "num": 1, "question": "Years in school?"},
            {"kind": "multiple_choice", "num": 2, "question": "Pick B", "answer": null, "rightAnswer": "B"}
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[1].answer(), None);
        assert_eq!(questions[2].right_answer(), Some(MultipleChoiceAnswer::B));
    }

    #[test]
    fn test_parse_records_without_kind() {
        let json = r#"[
            {"num": 4, "question": "What is your favourite sport to play?", "answer": null},
            {"num": 5, "question": "How many years have you spent in school?", "answer": [1, 2]},
            {"num": 6, "question": "French Revolution?", "answer": null, "rightanswer": "B"}
        ]"#;

        let questions = parse_questions(json).unwrap();
        assert_eq!(questions.len(), 3);
        assert!(!questions[0].is_multiple_choice());
        assert_eq!(
            questions[1].answer(),
            Some(Answer::Other(serde_json::json!([1, 2])))
        );
        assert_eq!(questions[2].right_answer(), Some(MultipleChoiceAnswer::B));
    }

    #[test]
    fn test_parse_rejects_non_arrays() {
        assert!(parse_questions(r#"{"num": 0}"#).is_err());
        assert!(parse_questions("not json").is_err());
    }

    #[tokio::test]
    async fn test_tokio_reader_loads_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.txt");

        let questions = load_questions_from_json(&TokioFileReader, &path).await.unwrap();
        let nums: Vec<_> = questions.iter().map(Question::num).collect();
        assert_eq!(nums, [4, 5, 6]);
        assert_eq!(questions[2].right_answer(), Some(MultipleChoiceAnswer::B));
    }

    #[tokio::test]
    async fn test_tokio_reader_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"kind\": \"freeform\",").unwrap();

        let err = load_questions_from_json(&TokioFileReader, file.path())
            .await
            .unwrap_err();
        assert!(matches!(err, SurveyError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_tokio_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_questions_from_json(&TokioFileReader, &path)
            .await
            .unwrap_err();
        match err {
            SurveyError::Io { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
