//! Positional answer checking.

use std::fmt;

use crate::models::Module;

/// A submission whose length does not match the module's solution count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArityMismatch {
    pub expected: usize,
    pub submitted: usize,
}

impl fmt::Display for ArityMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} answers, got {}",
            self.expected, self.submitted
        )
    }
}

impl std::error::Error for ArityMismatch {}

/// Check submitted answers against a module's solutions.
///
/// Returns one boolean per placeholder, in positional order: `true` at
/// position i iff `submitted[i]` is an exact literal match for
/// `solutions[i]`.
pub fn check_answers<S: AsRef<str>>(
    module: &Module,
    submitted: &[S],
) -> Result<Vec<bool>, ArityMismatch> {
    if submitted.len() != module.solutions.len() {
        return Err(ArityMismatch {
            expected: module.solutions.len(),
            submitted: submitted.len(),
        });
    }

    Ok(module
        .solutions
        .iter()
        .zip(submitted)
        .map(|(solution, answer)| solution.matches(answer.as_ref()))
        .collect())
}

/// Number of correct positions in a check result.
pub fn score(results: &[bool]) -> usize {
    results.iter().filter(|correct| **correct).count()
}
