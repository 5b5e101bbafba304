pub mod diagnostics;
pub mod error;
pub mod location;
pub mod result;
pub mod stage;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::AnalysisError;
pub use location::{Location, Position};
pub use result::AnalysisResult;
pub use stage::Stage;
