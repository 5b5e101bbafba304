pub mod balance;

use minic_core::AnalysisResult;

pub use balance::BalanceChecker;


/// Runs the syntax stage: parentheses must be balanced and never close below depth zero.
pub fn check_balance(content: &str) -> AnalysisResult<()> {
    let diagnostics = BalanceChecker::new(content).check();
    tracing::debug!(errors = diagnostics.len(), "syntax analysis finished");
    AnalysisResult::from_diagnostics((), diagnostics)
}
