//! Raw approval data as delivered by the back end

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApprovalError;
use crate::status::ApprovalStatus;

/// One actor in the approval chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Roles in the approval chain, in signing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalRole {
    Prepared,
    Checked,
    Acknowledged,
    Approved,
    Received,
}

/// Per-role approval state for a document
///
/// This is the raw wire shape; the canonical status is derived from it
/// by the resolver, never read off `approval_status` directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalSummary {
    pub prepared: Option<Actor>,
    pub checked: Option<Actor>,
    pub acknowledged: Option<Actor>,
    pub approved: Option<Actor>,
    pub received: Option<Actor>,
    /// Raw status string as delivered; may be empty or unrecognized
    pub approval_status: Option<String>,
    pub rejection_remarks: Option<String>,
    pub rejected_date: Option<DateTime<Utc>>,
    pub prepared_date: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApprovalSummary {
    /// Returns the actor recorded for a role
    pub fn actor(&self, role: ApprovalRole) -> Option<&Actor> {
        match role {
            ApprovalRole::Prepared => self.prepared.as_ref(),
            ApprovalRole::Checked => self.checked.as_ref(),
            ApprovalRole::Acknowledged => self.acknowledged.as_ref(),
            ApprovalRole::Approved => self.approved.as_ref(),
            ApprovalRole::Received => self.received.as_ref(),
        }
    }

    /// Checks the remark invariant: rejection remarks are present and
    /// non-empty exactly when the raw status resolves to Rejected.
    pub fn validate(&self) -> Result<(), ApprovalError> {
        let status = self
            .approval_status
            .as_deref()
            .map(ApprovalStatus::parse_lenient)
            .unwrap_or(ApprovalStatus::Draft);
        let has_remarks = self
            .rejection_remarks
            .as_deref()
            .map_or(false, |r| !r.trim().is_empty());

        match (status, has_remarks) {
            (ApprovalStatus::Rejected, false) => Err(ApprovalError::MissingRejectionRemarks),
            (ApprovalStatus::Rejected, true) => Ok(()),
            (_, true) => Err(ApprovalError::UnexpectedRejectionRemarks),
            (_, false) => Ok(()),
        }
    }
}
