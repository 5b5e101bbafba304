use serde::Serialize;

use crate::{AnalysisError, Location};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Diagnostic {
    pub location: Location,
    pub error: AnalysisError,
}

impl Diagnostic {
    pub fn error(location: Location, error: AnalysisError) -> Self {
        Self { location, error }
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Diagnostics in discovery order. Nothing is deduplicated.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(self) -> Vec<Diagnostic> {
        self.0
    }

    pub fn error(&mut self, location: Location, error: AnalysisError) {
        self.0.push(Diagnostic::error(location, error));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
