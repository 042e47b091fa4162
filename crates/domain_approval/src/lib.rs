//! Approval Domain
//!
//! This crate derives a document's canonical status from raw approval
//! fields and gates everything else on it: field editability, badge
//! presentation, and the submit/reject transitions.
//!
//! # Status chain
//!
//! ```text
//! Draft -> Prepared -> Checked -> Acknowledged -> Approved -> Received
//!   \-> Rejected
//! ```
//!
//! Status is never stored as independent mutable state; it is resolved
//! from the approval summary (plus legacy transfer flags) every time it
//! is needed.

pub mod status;
pub mod summary;
pub mod resolver;
pub mod editability;
pub mod workflow;
pub mod error;

pub use status::{ApprovalStatus, BadgeColor};
pub use summary::{Actor, ApprovalRole, ApprovalSummary};
pub use resolver::{resolve, LegacyStatusFlags};
pub use editability::{Editability, StatusBadge};
pub use workflow::{submit, reject, ActingUser, RemarkDraft};
pub use error::ApprovalError;
