//! # case-class-quiz
//!
//! An educational quiz about case classes: prose explanations, code
//! snippets with blanked-out expected values (`__`), and answer keys,
//! together with the loader and answer checker a quiz front end needs.
//! Rendering and answer collection are up to the consumer.
//!
//! ## Usage
//!
//! ```rust
//! use case_class_quiz::{check_answers, Document};
//!
//! // The shipped quiz; arbitrary content loads via Document::from_json.
//! let document = Document::builtin();
//!
//! let first = &document.modules[0];
//! let results = check_answers(first, &["true", "false"]).unwrap();
//! assert_eq!(results, vec![true, true]);
//! ```

mod checker;
mod data;
mod models;
mod session;

pub use checker::{check_answers, score, ArityMismatch};
pub use data::{
    builtin_document, load_document_from_path, parse_document, LoadError, MalformedContent,
};
pub use models::{Document, Literal, Module, PLACEHOLDER};
pub use session::Session;
