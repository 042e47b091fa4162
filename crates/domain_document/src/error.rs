//! Document domain errors

use thiserror::Error;

use core_kernel::PortError;
use domain_approval::ApprovalError;

/// Errors raised by document operations
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Pre-submit validation failed; one message per missing field
    #[error("Validation failed: {}", issues.join("; "))]
    Validation { issues: Vec<String> },

    /// A business rule refused the transition
    #[error(transparent)]
    Approval(#[from] ApprovalError),

    /// The back end reported or caused a failure
    #[error(transparent)]
    Port(#[from] PortError),
}

impl DocumentError {
    /// True when the failure was a transient I/O problem worth surfacing
    /// as retryable
    pub fn is_transient(&self) -> bool {
        matches!(self, DocumentError::Port(e) if e.is_transient())
    }
}
