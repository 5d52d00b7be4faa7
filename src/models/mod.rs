mod document;
mod literal;

pub use document::{Document, Module, PLACEHOLDER};
pub use literal::Literal;
