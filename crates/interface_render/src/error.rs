//! Render interface errors

use thiserror::Error;

use domain_document::DocumentError;
use domain_print::PrintError;

/// Errors raised while driving the render surface
#[derive(Debug, Error)]
pub enum RenderError {
    /// A document operation failed
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Print preparation failed
    #[error(transparent)]
    Print(#[from] PrintError),
}
