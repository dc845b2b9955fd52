use std::io;

use cl_scan::{ConfigError, ReportError, ScanError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}
