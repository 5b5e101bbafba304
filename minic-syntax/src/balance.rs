use minic_core::{AnalysisError, Diagnostics, Location};

/// Tracks `(`/`)` nesting over raw source text. Braces and brackets are not checked.
#[derive(Debug)]
pub struct BalanceChecker<'src> {
    content: &'src str,
    // byte offsets of the `(` still waiting for their `)`; its length is the nesting depth
    open: Vec<usize>,
}

impl<'src> BalanceChecker<'src> {
    pub fn new(content: &'src str) -> Self {
        Self {
            content,
            open: Vec::new(),
        }
    }

    /// Reports at most one diagnostic: the first `)` that closes nothing stops the scan,
    /// otherwise any `(` left open at the end is reported at the innermost one.
    pub fn check(mut self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for (index, ch) in self.content.char_indices() {
            match ch {
                '(' => self.open.push(index),
                ')' if self.open.pop().is_none() => {
                    diagnostics.error(
                        Location::new(index, index + 1),
                        AnalysisError::UnmatchedClosingParen,
                    );
                    return diagnostics;
                }
                _ => {}
            }
        }

        if let Some(&index) = self.open.last() {
            tracing::trace!(depth = self.open.len(), "unclosed parentheses at end of source");
            diagnostics.error(
                Location::new(index, index + 1),
                AnalysisError::UnmatchedOpeningParen,
            );
        }

        diagnostics
    }
}
