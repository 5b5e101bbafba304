use serde::Serialize;

use crate::{Diagnostic, Diagnostics};

/// Outcome of one analysis stage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum AnalysisResult<T> {
    Pass(T),
    Fail(Vec<Diagnostic>),
}

impl<T> AnalysisResult<T> {
    /// Passes with `payload` when no diagnostics were collected.
    pub fn from_diagnostics(payload: T, diagnostics: Diagnostics) -> Self {
        match diagnostics.is_empty() {
            true => AnalysisResult::Pass(payload),
            false => AnalysisResult::Fail(diagnostics.items()),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, AnalysisResult::Pass(_))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            AnalysisResult::Pass(_) => &[],
            AnalysisResult::Fail(diagnostics) => diagnostics,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            AnalysisResult::Pass(payload) => Some(payload),
            AnalysisResult::Fail(_) => None,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics().iter().map(Diagnostic::message).collect()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisResult<U> {
        match self {
            AnalysisResult::Pass(payload) => AnalysisResult::Pass(f(payload)),
            AnalysisResult::Fail(diagnostics) => AnalysisResult::Fail(diagnostics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisError, Location};

    #[test]
    fn test_empty_diagnostics_pass() {
        let result = AnalysisResult::from_diagnostics(3, Diagnostics::new());
        assert_eq!(result, AnalysisResult::Pass(3));
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_diagnostics_keep_discovery_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.error(Location::new(4, 5), AnalysisError::UndeclaredVariable("b".into()));
        diagnostics.error(Location::new(0, 1), AnalysisError::UndeclaredVariable("a".into()));
        diagnostics.error(Location::new(4, 5), AnalysisError::UndeclaredVariable("b".into()));

        let result = AnalysisResult::from_diagnostics((), diagnostics);
        assert!(!result.is_pass());
        assert_eq!(
            result.messages(),
            vec![
                "Semantic error: Variable 'b' is used without being declared.",
                "Semantic error: Variable 'a' is used without being declared.",
                "Semantic error: Variable 'b' is used without being declared.",
            ]
        );
    }
}
