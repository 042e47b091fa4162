//! Submit and reject transitions
//!
//! The only two operations that change a document's status. Both are
//! pure: they check the resolved status, then return the updated
//! approval summary for the caller to persist. All stamping uses the
//! caller-supplied clock so transitions stay deterministic under test.

use chrono::{DateTime, Utc};

use crate::error::ApprovalError;
use crate::status::ApprovalStatus;
use crate::summary::{Actor, ApprovalSummary};

/// The user performing a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActingUser {
    pub id: String,
    pub full_name: String,
}

impl ActingUser {
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
        }
    }
}

/// Rejection remark with an immutable attribution prefix
///
/// The prefix names the acting user and cannot be removed: any edit
/// that damages it is reverted to the last accepted text, keystroke by
/// keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkDraft {
    prefix: String,
    text: String,
}

impl RemarkDraft {
    /// Seeds a draft attributed to the acting user
    pub fn for_actor(actor: &ActingUser) -> Self {
        let prefix = format!("[{} - Prepared]: ", actor.full_name);
        Self {
            text: prefix.clone(),
            prefix,
        }
    }

    /// Applies an edited text, keeping the previous text whenever the
    /// edit removed or shortened the prefix
    pub fn apply_edit(&mut self, edited: &str) {
        if edited.starts_with(&self.prefix) {
            self.text = edited.to_string();
        }
    }

    /// Full text including the prefix
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attribution prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the prefix
    pub fn body(&self) -> &str {
        &self.text[self.prefix.len()..]
    }

    /// True when a meaningful remark follows the prefix
    pub fn has_body(&self) -> bool {
        !self.body().trim().is_empty()
    }
}

/// Promotes a Draft document to Prepared.
///
/// Stamps the preparer and the preparation time. Refused for any other
/// status.
pub fn submit(
    summary: Option<&ApprovalSummary>,
    current: ApprovalStatus,
    actor: &ActingUser,
    now: DateTime<Utc>,
) -> Result<ApprovalSummary, ApprovalError> {
    if current != ApprovalStatus::Draft {
        return Err(ApprovalError::NotEditable(current));
    }

    let mut updated = summary.cloned().unwrap_or_default();
    updated.approval_status = Some(ApprovalStatus::Prepared.as_str().to_string());
    updated.prepared = Some(Actor::new(actor.id.clone(), actor.full_name.clone()));
    updated.prepared_date = Some(now);
    updated.updated_at = Some(now);
    Ok(updated)
}

/// Rejects a Draft document with a mandatory attributed remark.
///
/// Stamps the rejection time and the acting user, and persists the full
/// remark text including the attribution prefix. Refused for any status
/// other than Draft, and for remarks with an empty body.
pub fn reject(
    summary: Option<&ApprovalSummary>,
    current: ApprovalStatus,
    actor: &ActingUser,
    remark: &RemarkDraft,
    now: DateTime<Utc>,
) -> Result<ApprovalSummary, ApprovalError> {
    if current != ApprovalStatus::Draft {
        return Err(ApprovalError::RejectRefused(current));
    }
    if !remark.has_body() {
        return Err(ApprovalError::EmptyRejectionRemark);
    }

    let mut updated = summary.cloned().unwrap_or_default();
    updated.approval_status = Some(ApprovalStatus::Rejected.as_str().to_string());
    updated.rejection_remarks = Some(remark.text().to_string());
    updated.rejected_date = Some(now);
    updated.prepared = Some(Actor::new(actor.id.clone(), actor.full_name.clone()));
    updated.updated_at = Some(now);
    Ok(updated)
}
