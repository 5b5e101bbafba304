pub mod lexer;
pub mod token;

use minic_core::{AnalysisError, AnalysisResult, Diagnostics};

pub use lexer::Lexer;
pub use token::*;

#[cfg(test)]
mod tests;

/// Runs the lexical stage. Fails with a single diagnostic, anchored at the first unrecognized
/// run, when any non-whitespace text is left over after matching.
pub fn tokenize(content: &str) -> AnalysisResult<Vec<Token<'_>>> {
    let mut lexer = Lexer::new(content);
    let tokens = lexer.by_ref().collect::<Vec<_>>();

    let mut diagnostics = Diagnostics::new();
    if let Some(location) = lexer.unrecognized().first() {
        diagnostics.error(*location, AnalysisError::UnrecognizedTokens);
    }

    tracing::debug!(
        tokens = tokens.len(),
        unrecognized = lexer.unrecognized().len(),
        "lexical analysis finished"
    );

    AnalysisResult::from_diagnostics(tokens, diagnostics)
}
