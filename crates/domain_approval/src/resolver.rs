//! Status resolution
//!
//! A document's status is never stored as independent state; it is
//! derived from the approval summary plus a small set of legacy
//! transfer flags, in a fixed precedence order.

use core_kernel::DocumentKey;

use crate::status::ApprovalStatus;
use crate::summary::ApprovalSummary;

/// Legacy transfer/staging flags, consulted only when the document has
/// no approval summary at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyStatusFlags {
    /// Document has been transferred to the system of record
    pub transferred: bool,
    /// Key still carries the staging prefix
    pub staged: bool,
    /// Number issued by the back end, positive once numbered
    pub doc_number: Option<i64>,
}

impl LegacyStatusFlags {
    /// Derives the flags from document fields
    pub fn for_document(transferred: bool, key: &DocumentKey, doc_number: Option<i64>) -> Self {
        Self {
            transferred,
            staged: key.is_staged(),
            doc_number,
        }
    }
}

/// Derives the canonical status from raw approval fields.
///
/// Pure and total: any combination of inputs resolves to one of the
/// seven canonical statuses.
///
/// Precedence:
/// 1. a non-empty raw status on the summary, parsed case-insensitively;
/// 2. a summary with an empty status resolves to Draft;
/// 3. without a summary, the legacy cascade: transferred documents are
///    Received, staged keys are Draft, a positive document number means
///    Prepared, and anything else is Draft.
pub fn resolve(approval: Option<&ApprovalSummary>, legacy: &LegacyStatusFlags) -> ApprovalStatus {
    match approval {
        Some(summary) => match summary.approval_status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => ApprovalStatus::parse_lenient(raw),
            _ => ApprovalStatus::Draft,
        },
        None => {
            if legacy.transferred {
                ApprovalStatus::Received
            } else if legacy.staged {
                ApprovalStatus::Draft
            } else if legacy.doc_number.map_or(false, |n| n > 0) {
                ApprovalStatus::Prepared
            } else {
                ApprovalStatus::Draft
            }
        }
    }
}
