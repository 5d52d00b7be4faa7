//! In-memory progress through a document during one quiz run.

use crate::checker::{check_answers, ArityMismatch};
use crate::models::{Document, Module};

/// Walks a document module by module, recording check results as answers
/// are submitted. The document itself is never mutated.
pub struct Session {
    document: Document,
    current_module_index: usize,
    results: Vec<Option<Vec<bool>>>,
}

impl Session {
    pub fn new(document: Document) -> Self {
        let num_modules = document.modules.len();

        Self {
            document,
            current_module_index: 0,
            results: vec![None; num_modules],
        }
    }

    /// A session over the quiz shipped with the crate.
    pub fn builtin() -> Self {
        Self::new(Document::builtin())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The module awaiting answers, or `None` once the session is complete.
    pub fn current_module(&self) -> Option<&Module> {
        self.document.modules.get(self.current_module_index)
    }

    pub fn current_module_number(&self) -> usize {
        self.current_module_index + 1
    }

    pub fn total_modules(&self) -> usize {
        self.document.modules.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_module_index >= self.document.modules.len()
    }

    /// Recorded check results, one slot per module in document order.
    pub fn results(&self) -> &[Option<Vec<bool>>] {
        &self.results
    }

    /// Check `answers` against the current module, record the outcome,
    /// and advance to the next module.
    ///
    /// On a completed session this records nothing and returns an empty
    /// result.
    pub fn submit<S: AsRef<str>>(&mut self, answers: &[S]) -> Result<Vec<bool>, ArityMismatch> {
        let Some(module) = self.document.modules.get(self.current_module_index) else {
            return Ok(Vec::new());
        };

        let results = check_answers(module, answers)?;
        self.results[self.current_module_index] = Some(results.clone());
        self.current_module_index += 1;

        Ok(results)
    }

    /// Total correct placeholders across all answered modules.
    pub fn score(&self) -> usize {
        self.results
            .iter()
            .flatten()
            .flatten()
            .filter(|correct| **correct)
            .count()
    }

    /// Total placeholders in the document.
    pub fn total_placeholders(&self) -> usize {
        self.document
            .modules
            .iter()
            .map(|module| module.solutions.len())
            .sum()
    }

    pub fn restart(&mut self) {
        self.current_module_index = 0;
        self.results = vec![None; self.document.modules.len()];
    }
}
