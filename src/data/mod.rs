mod loader;

pub use loader::{
    builtin_document, load_document_from_path, parse_document, LoadError, MalformedContent,
};
