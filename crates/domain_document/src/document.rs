//! The document aggregate shared by all four form sub-types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AttachmentId, Currency, DocumentKey};
use domain_approval::{resolve, ApprovalStatus, ApprovalSummary, Editability, LegacyStatusFlags};

use crate::financials::DocumentFinancials;
use crate::kind::DocumentKind;
use crate::line_item::LineItem;

/// Customer named on the document header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub code: String,
    pub name: String,
}

/// Payment instructions printed on the last page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
    pub swift_code: Option<String>,
}

/// Issuing-company block printed on the header and encoded in the QR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
}

/// A file uploaded alongside the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: AttachmentId,
    pub file_name: String,
    pub url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// An approval document
///
/// Status is never stored on the document; it is derived from the
/// approval summary and the legacy transfer flags whenever needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Staging/primary key correlating cache entries and API resources
    pub key: DocumentKey,
    /// Number issued by the back end, positive once numbered
    pub doc_number: Option<i64>,
    pub kind: DocumentKind,
    pub customer: CustomerRef,
    pub doc_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub currency: Currency,
    /// Line order is print order
    pub lines: Vec<LineItem>,
    pub financials: DocumentFinancials,
    pub approval: Option<ApprovalSummary>,
    /// Legacy flag: document transferred to the system of record
    pub transferred: bool,
    pub remarks: Option<String>,
    pub ship_to: Option<String>,
    pub order_numbers: Vec<String>,
    pub bank: Option<BankInfo>,
    pub company: Option<CompanyInfo>,
    /// Pre-rendered QR content, reused verbatim on every page
    pub qr_source: Option<String>,
    pub attachments: Vec<Attachment>,
    /// Legacy document-level approver name, consulted when the summary
    /// carries no approved actor
    pub approved_by: Option<String>,
    /// Legacy document-level receiver name
    pub received_by: Option<String>,
}

impl Document {
    /// Creates an empty staged document of the given kind
    pub fn staged(kind: DocumentKind, raw_key: impl std::fmt::Display) -> Self {
        Self {
            key: DocumentKey::staged(raw_key),
            doc_number: None,
            kind,
            customer: CustomerRef::default(),
            doc_date: None,
            due_date: None,
            currency: Currency::default(),
            lines: Vec::new(),
            financials: DocumentFinancials::default(),
            approval: None,
            transferred: false,
            remarks: None,
            ship_to: None,
            order_numbers: Vec::new(),
            bank: None,
            company: None,
            qr_source: None,
            attachments: Vec::new(),
            approved_by: None,
            received_by: None,
        }
    }

    /// Derives the canonical status from the approval summary and the
    /// legacy flags
    pub fn status(&self) -> ApprovalStatus {
        let legacy = LegacyStatusFlags::for_document(self.transferred, &self.key, self.doc_number);
        resolve(self.approval.as_ref(), &legacy)
    }

    /// Field-group enablement derived from the current status
    pub fn editability(&self) -> Editability {
        Editability::for_status(self.status())
    }

    /// Count of lines that carry enough data to bill
    pub fn valid_line_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_valid()).count()
    }
}
