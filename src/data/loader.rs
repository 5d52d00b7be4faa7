use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Document;

/// The case-class quiz shipped with the crate.
const BUILTIN_CONTENT: &str = include_str!("../../content/case_classes.json");

/// Error loading a document from a file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// The file was read but its content is not a valid document.
    Malformed(MalformedContent),
}

/// Structural defect in quiz content.
#[derive(Debug)]
pub enum MalformedContent {
    /// Not valid JSON, or a required field is absent or of the wrong type.
    Parse(serde_json::Error),
    /// The document has no modules.
    NoModules,
    /// A module's placeholder count does not equal its solution count.
    PlaceholderMismatch {
        module: usize,
        placeholders: usize,
        solutions: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read content: {}", e),
            LoadError::Malformed(e) => write!(f, "malformed content: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<MalformedContent> for LoadError {
    fn from(err: MalformedContent) -> Self {
        LoadError::Malformed(err)
    }
}

impl fmt::Display for MalformedContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedContent::Parse(e) => write!(f, "{}", e),
            MalformedContent::NoModules => write!(f, "document contains no modules"),
            MalformedContent::PlaceholderMismatch {
                module,
                placeholders,
                solutions,
            } => write!(
                f,
                "module {} has {} placeholders but {} solutions",
                module, placeholders, solutions
            ),
        }
    }
}

impl std::error::Error for MalformedContent {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MalformedContent::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MalformedContent {
    fn from(err: serde_json::Error) -> Self {
        MalformedContent::Parse(err)
    }
}

/// Load and validate a document from a JSON file.
pub fn load_document_from_path<P: AsRef<Path>>(path: P) -> Result<Document, LoadError> {
    let json_content = fs::read_to_string(path)?;
    let document = parse_document(&json_content)?;
    Ok(document)
}

/// Parse and validate a document from JSON text.
pub fn parse_document(json_content: &str) -> Result<Document, MalformedContent> {
    let document: Document = serde_json::from_str(json_content)?;
    validate(&document)?;
    Ok(document)
}

/// The quiz content shipped with the crate, parsed and validated.
pub fn builtin_document() -> Document {
    parse_document(BUILTIN_CONTENT)
        .unwrap_or_else(|err| panic!("embedded content is malformed: {}", err))
}

fn validate(document: &Document) -> Result<(), MalformedContent> {
    if document.modules.is_empty() {
        return Err(MalformedContent::NoModules);
    }

    for (index, module) in document.modules.iter().enumerate() {
        let placeholders = module.placeholder_count();
        if placeholders != module.solutions.len() {
            return Err(MalformedContent::PlaceholderMismatch {
                module: index,
                placeholders,
                solutions: module.solutions.len(),
            });
        }
    }

    Ok(())
}

impl Document {
    /// Load and validate a document from a JSON file.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load_document_from_path(path)
    }

    /// The case-class quiz shipped with the crate.
    pub fn builtin() -> Self {
        builtin_document()
    }
}
