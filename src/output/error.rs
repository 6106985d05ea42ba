// Fri Oct 16 2026 - Alex

use crate::structure::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
