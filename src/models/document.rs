use serde::{Deserialize, Serialize};

use crate::models::Literal;

/// Marker in a code sample standing in for a blanked-out value.
pub const PLACEHOLDER: &str = "__";

/// A complete quiz: a title and an ordered sequence of modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub modules: Vec<Module>,
}

/// One quiz unit: explanatory prose, a code sample with blanks, and the
/// expected fill-in values in positional order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub preparagraph: String,
    pub code: String,
    pub solutions: Vec<Literal>,
    pub postparagraph: String,
}

impl Module {
    /// Number of `__` markers in the code sample.
    ///
    /// For well-formed content this equals `solutions.len()`; the loader
    /// rejects modules where it does not.
    pub fn placeholder_count(&self) -> usize {
        self.code.matches(PLACEHOLDER).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_count() {
        let module = Module {
            preparagraph: String::new(),
            code: "(a == b) shouldBe __\n(a == c) shouldBe __".to_string(),
            solutions: vec![Literal::Bool(true), Literal::Bool(false)],
            postparagraph: String::new(),
        };
        assert_eq!(module.placeholder_count(), 2);
        assert_eq!(module.placeholder_count(), module.solutions.len());
    }

    #[test]
    fn test_single_underscores_are_not_placeholders() {
        let module = Module {
            preparagraph: String::new(),
            code: "tuple._1 shouldBe __".to_string(),
            solutions: vec![Literal::Text("Fred".to_string())],
            postparagraph: String::new(),
        };
        assert_eq!(module.placeholder_count(), 1);
    }
}
