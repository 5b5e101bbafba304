use std::path::PathBuf;

use minic::PipelineError;
use thiserror::Error;

pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] minic_config::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
