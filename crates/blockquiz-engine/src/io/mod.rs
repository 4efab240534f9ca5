use crate::autoformat::McqDialect;
use crate::editing::Document;
use crate::markup::MarkupError;
use std::fs;
use std::path::{Path, PathBuf};

/// Content of a brand-new document
pub const WELCOME_DOCUMENT: &str = r#"<h2>Hi there,</h2>
<p>this is a <em>basic</em> example of a quiz document. Type <code>?/</code> at the start of an empty paragraph to ask the AI a question, or <code>???</code> to drop in a multiple-choice question.</p>
<p>Structured questions work too: write question("...", answer("..."), answer("...", correct = TRUE)) and finish the line.</p>
<div data-type="mcq" data-question-text="What number is the letter A in the English alphabet?" data-answers='[{"text":"8","correct":false},{"text":"14","correct":false},{"text":"1","correct":true},{"text":"23","correct":false}]'></div>"#;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),
}

/// Read a document file and return its markup
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write markup to a document file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Load and parse a document; a missing file yields the welcome document
pub fn load_document(path: &Path, dialect: McqDialect) -> Result<Document, IoError> {
    let markup = match read_file(path) {
        Ok(markup) => markup,
        Err(IoError::NotFound(_)) => {
            log::info!(
                "{} does not exist yet, starting from the welcome document",
                path.display()
            );
            WELCOME_DOCUMENT.to_string()
        }
        Err(e) => return Err(e),
    };
    Document::from_markup(&markup, dialect).map_err(|e| IoError::InvalidDocument {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

pub fn save_document(path: &Path, document: &Document) -> Result<(), IoError> {
    write_file(path, &document.to_markup()?)
}
