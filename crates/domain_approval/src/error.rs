//! Approval domain errors

use thiserror::Error;

use crate::status::ApprovalStatus;

/// Errors raised by approval validation and transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApprovalError {
    /// A Rejected summary carries no rejection remarks
    #[error("Rejection remarks are required when the status is Rejected")]
    MissingRejectionRemarks,

    /// Rejection remarks are present on a summary that is not Rejected
    #[error("Rejection remarks are only valid on a Rejected document")]
    UnexpectedRejectionRemarks,

    /// Submit attempted on a document that is not in Draft
    #[error("Document cannot be submitted: current status is {0}")]
    NotEditable(ApprovalStatus),

    /// Reject attempted on a document that is not in Draft
    #[error("Only a Draft document can be rejected: current status is {0}")]
    RejectRefused(ApprovalStatus),

    /// The rejection remark has no text after the attribution prefix
    #[error("A rejection remark is required after the attribution prefix")]
    EmptyRejectionRemark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_message_names_the_actual_status() {
        let error = ApprovalError::RejectRefused(ApprovalStatus::Checked);
        assert!(error.to_string().contains("Checked"));

        let error = ApprovalError::NotEditable(ApprovalStatus::Approved);
        assert!(error.to_string().contains("Approved"));
    }
}
