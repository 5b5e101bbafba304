use serde::Serialize;
use thiserror::Error;

use crate::Stage;

/// Every error a stage can report. The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
pub enum AnalysisError {
    #[error("Lexical error: Unrecognized token(s) found")]
    UnrecognizedTokens,
    #[error("Syntax error: Unmatched closing parenthesis")]
    UnmatchedClosingParen,
    #[error("Syntax error: Unmatched opening parenthesis")]
    UnmatchedOpeningParen,
    #[error("Semantic error: Class '{0}' is redeclared.")]
    ClassRedeclared(String),
    #[error("Semantic error: Variable '{0}' is redeclared.")]
    VariableRedeclared(String),
    #[error("Semantic error: Variable '{0}' is used without being declared.")]
    UndeclaredVariable(String),
}

impl AnalysisError {
    pub fn stage(&self) -> Stage {
        match self {
            AnalysisError::UnrecognizedTokens => Stage::Lexical,
            AnalysisError::UnmatchedClosingParen | AnalysisError::UnmatchedOpeningParen => {
                Stage::Syntax
            }
            AnalysisError::ClassRedeclared(_)
            | AnalysisError::VariableRedeclared(_)
            | AnalysisError::UndeclaredVariable(_) => Stage::Semantic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AnalysisError::UnrecognizedTokens.to_string(),
            "Lexical error: Unrecognized token(s) found"
        );
        assert_eq!(
            AnalysisError::ClassRedeclared("A".into()).to_string(),
            "Semantic error: Class 'A' is redeclared."
        );
        assert_eq!(
            AnalysisError::UndeclaredVariable("y".into()).to_string(),
            "Semantic error: Variable 'y' is used without being declared."
        );
    }

    #[test]
    fn test_stage_of_error() {
        assert_eq!(AnalysisError::UnmatchedOpeningParen.stage(), Stage::Syntax);
        assert_eq!(AnalysisError::VariableRedeclared("x".into()).stage(), Stage::Semantic);
    }
}
