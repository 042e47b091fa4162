//! Document sub-types as configuration data
//!
//! The four approval forms share one model and one set of rules; what
//! differs between them (API resource segment, labels, the column span
//! of the empty-page placeholder row) lives here as data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-type of an approval document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    ArInvoice,
    OutgoingPayment,
    Settlement,
    Reimbursement,
}

/// Per-kind configuration consumed by the service and print layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    /// API resource segment, e.g. `/api/ar-invoices/{id}/details`
    pub resource: &'static str,
    /// Short label used in notifications
    pub label: &'static str,
    /// Title printed on the document header
    pub print_title: &'static str,
    /// Column count of the item table, spanned by the "no items" row
    pub placeholder_span: u32,
}

impl DocumentKind {
    /// All four document sub-types
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::ArInvoice,
        DocumentKind::OutgoingPayment,
        DocumentKind::Settlement,
        DocumentKind::Reimbursement,
    ];

    /// Returns the configuration profile for this kind
    pub fn profile(&self) -> &'static KindProfile {
        match self {
            DocumentKind::ArInvoice => &AR_INVOICE,
            DocumentKind::OutgoingPayment => &OUTGOING_PAYMENT,
            DocumentKind::Settlement => &SETTLEMENT,
            DocumentKind::Reimbursement => &REIMBURSEMENT,
        }
    }
}

static AR_INVOICE: KindProfile = KindProfile {
    resource: "ar-invoices",
    label: "AR Invoice",
    print_title: "INVOICE",
    placeholder_span: 8,
};

static OUTGOING_PAYMENT: KindProfile = KindProfile {
    resource: "outgoing-payments",
    label: "Outgoing Payment",
    print_title: "OUTGOING PAYMENT",
    placeholder_span: 6,
};

static SETTLEMENT: KindProfile = KindProfile {
    resource: "settlements",
    label: "Settlement",
    print_title: "SETTLEMENT",
    placeholder_span: 7,
};

static REIMBURSEMENT: KindProfile = KindProfile {
    resource: "reimbursements",
    label: "Reimbursement",
    print_title: "REIMBURSEMENT",
    placeholder_span: 7,
};

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile().label)
    }
}
