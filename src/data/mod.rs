mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_PATH, FileReader, TokioFileReader, load_questions_from_json,
    parse_questions, read_questions_file,
};
