pub mod analyzer;
pub mod names;

use minic_config::DeclarationMode;
use minic_core::AnalysisResult;

pub use analyzer::{DeclarationTracker, SemanticInfo, TYPE_KEYWORDS, is_reserved};
pub use names::{DeclaredName, DeclaredNameSet};


/// Runs the semantic stage with the default line-prefix heuristic for declaration lines.
pub fn check_semantics(content: &str) -> AnalysisResult<()> {
    check_semantics_with(content, DeclarationMode::default())
}

pub fn check_semantics_with(content: &str, mode: DeclarationMode) -> AnalysisResult<()> {
    let info = DeclarationTracker::with_mode(content, mode).analyze();

    match info.diagnostics.is_empty() {
        true => AnalysisResult::Pass(()),
        false => AnalysisResult::Fail(info.diagnostics),
    }
}
