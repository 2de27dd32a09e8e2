use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::LoadError;
use crate::models::Question;

/// Reads a JSON array of questions. An empty array is rejected.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    debug!("Reading questions from {}", path.display());

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    info!("Loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}
