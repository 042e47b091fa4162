//! Document Domain
//!
//! This crate owns the document model shared by all four approval form
//! sub-types (AR invoices, outgoing payments, settlements,
//! reimbursements), the ports through which documents are fetched,
//! patched, and cached, and the `ApprovalService` that orchestrates the
//! submit and reject operations against those ports.
//!
//! Sub-type differences are configuration data (`KindProfile`), never
//! copied code: one document model and one service cover all four forms.

pub mod kind;
pub mod line_item;
pub mod financials;
pub mod document;
pub mod ports;
pub mod cache;
pub mod services;
pub mod error;

pub use kind::{DocumentKind, KindProfile};
pub use line_item::LineItem;
pub use financials::DocumentFinancials;
pub use document::{Attachment, BankInfo, CompanyInfo, CustomerRef, Document};
pub use ports::{ApprovalPatch, AttachmentUpload, DocumentPort, Envelope};
pub use cache::{DocumentCache, InMemoryDocumentCache};
pub use services::ApprovalService;
pub use error::DocumentError;
