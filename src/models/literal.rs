use std::fmt;

use serde::{Deserialize, Serialize};

/// The expected value for one placeholder.
///
/// Stored in its native JSON shape (string, boolean, or number) so that
/// content round-trips losslessly; compared against submitted answers by
/// exact textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Literal {
    /// Whether a submitted answer matches this solution exactly.
    ///
    /// Comparison is against the literal's textual form: `true`/`false`
    /// for booleans, the number as written for numbers, the string
    /// itself for strings. No coercion, no trimming.
    pub fn matches(&self, submitted: &str) -> bool {
        match self {
            Literal::Bool(b) => submitted == if *b { "true" } else { "false" },
            Literal::Number(n) => submitted == n.to_string(),
            Literal::Text(s) => submitted == s,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
        }
    }
}
