//! Test Data Builders
//!
//! Builder patterns for constructing test documents with sensible
//! defaults, so tests specify only the fields they care about.

use rust_decimal_macros::dec;

use core_kernel::{Currency, DocumentKey, Money};
use domain_approval::{Actor, ApprovalSummary};
use domain_document::{Document, DocumentFinancials, DocumentKind, LineItem};

use crate::fixtures::{DocumentFixtures, TemporalFixtures};

/// Builder for test documents
///
/// Defaults to a staged Draft AR invoice with one valid line and a
/// complete header.
pub struct TestDocumentBuilder {
    document: Document,
}

impl Default for TestDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDocumentBuilder {
    /// Creates a builder seeded with defaults
    pub fn new() -> Self {
        let mut document = Document::staged(DocumentKind::ArInvoice, 42);
        document.customer = DocumentFixtures::customer();
        document.doc_date = Some(TemporalFixtures::doc_date());
        document.due_date = Some(TemporalFixtures::due_date());
        document.lines = vec![TestLineItemBuilder::new().build()];
        Self { document }
    }

    /// Sets the document sub-type
    pub fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.document.kind = kind;
        self
    }

    /// Replaces the key
    pub fn with_key(mut self, key: DocumentKey) -> Self {
        self.document.key = key;
        self
    }

    /// Sets a back-end document number
    pub fn with_doc_number(mut self, number: i64) -> Self {
        self.document.doc_number = Some(number);
        self
    }

    /// Replaces the lines with `count` generated items
    pub fn with_line_count(mut self, count: usize) -> Self {
        self.document.lines = (0..count)
            .map(|i| TestLineItemBuilder::new().with_line_no((i + 1) as u32).build())
            .collect();
        self
    }

    /// Clears all line items
    pub fn without_lines(mut self) -> Self {
        self.document.lines.clear();
        self
    }

    /// Installs a complete financial set with a positive total
    pub fn with_complete_financials(mut self) -> Self {
        self.document.financials = DocumentFixtures::complete_financials();
        self
    }

    /// Installs a partial financial set that fails the completeness check
    pub fn with_incomplete_financials(mut self) -> Self {
        self.document.financials = DocumentFinancials {
            subtotal: Some(dec!(1000000)),
            tax_base: None,
            ..DocumentFixtures::complete_financials()
        };
        self
    }

    /// Installs an approval summary carrying the given raw status
    pub fn with_raw_status(mut self, raw: &str) -> Self {
        let summary = self.document.approval.get_or_insert_with(ApprovalSummary::default);
        summary.approval_status = Some(raw.to_string());
        self
    }

    /// Records an approved actor on the summary
    pub fn with_approved_actor(mut self, actor: Actor) -> Self {
        let summary = self.document.approval.get_or_insert_with(ApprovalSummary::default);
        summary.approved = Some(actor);
        self
    }

    /// Sets the pre-rendered QR source
    pub fn with_qr_source(mut self, source: &str) -> Self {
        self.document.qr_source = Some(source.to_string());
        self
    }

    /// Attaches the standard bank and company blocks
    pub fn with_print_blocks(mut self) -> Self {
        self.document.bank = Some(DocumentFixtures::bank());
        self.document.company = Some(DocumentFixtures::company());
        self
    }

    /// Builds the document
    pub fn build(self) -> Document {
        self.document
    }
}

/// Builder for test line items
pub struct TestLineItemBuilder {
    item: LineItem,
}

impl Default for TestLineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLineItemBuilder {
    /// Creates a builder seeded with a valid consulting line
    pub fn new() -> Self {
        Self {
            item: LineItem {
                line_no: 1,
                item_code: "SVC-001".to_string(),
                description: "Consulting services".to_string(),
                quantity: dec!(2),
                unit: Some("hour".to_string()),
                unit_price: Money::new(dec!(250000), Currency::IDR),
                discount: None,
            },
        }
    }

    /// Sets the line number (and a matching item code)
    pub fn with_line_no(mut self, line_no: u32) -> Self {
        self.item.line_no = line_no;
        self.item.item_code = format!("SVC-{:03}", line_no);
        self
    }

    /// Replaces the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.item.description = description.to_string();
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: rust_decimal::Decimal) -> Self {
        self.item.quantity = quantity;
        self
    }

    /// Builds the line item
    pub fn build(self) -> LineItem {
        self.item
    }
}
