//! Gated lexical, syntax and semantic analysis for small C-like programs.
//!
//! A [`Session`] holds one source buffer and only lets the next stage run once the previous one
//! passed. [`Renderer`] turns the reports into the text shown to the user.

pub mod pipeline;
pub mod render;

pub use pipeline::{PipelineError, PipelineState, Session, StageReport};
pub use render::Renderer;
