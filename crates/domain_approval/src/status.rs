//! Canonical approval status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a document in the approval chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Editable working state
    Draft,
    /// Submitted by the preparer
    Prepared,
    /// Verified by the checker
    Checked,
    /// Acknowledged by the supervisor
    Acknowledged,
    /// Approved for transfer
    Approved,
    /// Transferred to the system of record
    Received,
    /// Sent back with remarks
    Rejected,
}

/// Badge colors presented for non-editable statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Yellow,
    Purple,
    Green,
    Teal,
    Red,
    Grey,
}

impl ApprovalStatus {
    /// All seven canonical statuses
    pub const ALL: [ApprovalStatus; 7] = [
        ApprovalStatus::Draft,
        ApprovalStatus::Prepared,
        ApprovalStatus::Checked,
        ApprovalStatus::Acknowledged,
        ApprovalStatus::Approved,
        ApprovalStatus::Received,
        ApprovalStatus::Rejected,
    ];

    /// Parses a raw wire status, case-insensitively.
    ///
    /// Unrecognized or empty values resolve to Draft so callers always
    /// get one of the seven canonical statuses.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prepared" => ApprovalStatus::Prepared,
            "checked" => ApprovalStatus::Checked,
            "acknowledged" => ApprovalStatus::Acknowledged,
            "approved" => ApprovalStatus::Approved,
            "received" => ApprovalStatus::Received,
            "rejected" => ApprovalStatus::Rejected,
            _ => ApprovalStatus::Draft,
        }
    }

    /// Returns the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Draft => "Draft",
            ApprovalStatus::Prepared => "Prepared",
            ApprovalStatus::Checked => "Checked",
            ApprovalStatus::Acknowledged => "Acknowledged",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Received => "Received",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    /// True only for the single state that permits editing
    pub fn is_editable(&self) -> bool {
        matches!(self, ApprovalStatus::Draft)
    }

    /// Color of the status badge.
    ///
    /// Draft normally shows no badge at all; grey is the fallback for
    /// anything outside the six badge-carrying statuses.
    pub fn badge_color(&self) -> BadgeColor {
        match self {
            ApprovalStatus::Prepared => BadgeColor::Blue,
            ApprovalStatus::Checked => BadgeColor::Yellow,
            ApprovalStatus::Acknowledged => BadgeColor::Purple,
            ApprovalStatus::Approved => BadgeColor::Green,
            ApprovalStatus::Received => BadgeColor::Teal,
            ApprovalStatus::Rejected => BadgeColor::Red,
            ApprovalStatus::Draft => BadgeColor::Grey,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
