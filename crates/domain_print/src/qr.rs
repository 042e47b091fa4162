//! QR payload composition
//!
//! The QR code on the last page encodes an invoice summary. Payloads
//! that would exceed the external renderer's limits degrade to a
//! compact schema; a document that already carries a pre-rendered QR
//! source reuses it verbatim so every page of a multi-page document
//! shows the same code.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use core_kernel::format_value;
use core_kernel::temporal::display_date;
use domain_document::{BankInfo, CompanyInfo, Document};
use rust_decimal::Decimal;

use crate::config::PrintConfig;
use crate::error::PrintError;
use crate::signature::SignatureRecord;

/// Maximum customer-name length carried by the compact schema
const COMPACT_CUSTOMER_LIMIT: usize = 50;

/// Composed QR content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrContent {
    /// Pre-rendered source reused verbatim from the document
    Prerendered(String),
    /// Full invoice-summary schema
    Full(String),
    /// Compact schema used when the full payload exceeds the limits
    Compact(String),
}

impl QrContent {
    /// The string to encode
    pub fn content(&self) -> &str {
        match self {
            QrContent::Prerendered(s) | QrContent::Full(s) | QrContent::Compact(s) => s,
        }
    }

    /// True when size governance degraded the payload
    pub fn is_compact(&self) -> bool {
        matches!(self, QrContent::Compact(_))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FullPayload<'a> {
    invoice_number: String,
    document_key: &'a str,
    doc_date: Option<String>,
    due_date: Option<String>,
    generated_at: String,
    customer_code: &'a str,
    customer_name: &'a str,
    subtotal: Option<String>,
    discount: Option<String>,
    tax_base: Option<String>,
    tax: Option<String>,
    grand_total: Option<String>,
    currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    bank: Option<&'a BankInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a CompanyInfo>,
    approver_name: &'a str,
    approver_position: &'a str,
    generated_by: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompactPayload<'a> {
    invoice_number: String,
    amount: String,
    currency: &'static str,
    customer: &'a str,
    date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<u32>,
}

/// Composes QR content for a document under the configured limits
pub struct QrComposer<'a> {
    config: &'a PrintConfig,
}

impl<'a> QrComposer<'a> {
    pub fn new(config: &'a PrintConfig) -> Self {
        Self { config }
    }

    /// Composes the QR content for a page.
    ///
    /// `page` carries `(number, total)` when composing for a specific
    /// page of a multi-page document; the compact schema includes them
    /// for non-final pages only.
    pub fn compose(
        &self,
        document: &Document,
        signature: &SignatureRecord,
        generated_at: DateTime<Utc>,
        page: Option<(u32, u32)>,
    ) -> Result<QrContent, PrintError> {
        // A pre-rendered source always wins: regenerating would risk a
        // visually different code on later pages.
        if let Some(source) = document
            .qr_source
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            return Ok(QrContent::Prerendered(source.to_string()));
        }

        let full = self.full_payload(document, signature, generated_at)?;
        if full.len() <= self.config.qr_payload_limit
            && self.request_url(&full).len() <= self.config.qr_url_limit
        {
            return Ok(QrContent::Full(full));
        }

        warn!(
            key = %document.key,
            size = full.len(),
            "QR payload exceeds the size limits, degrading to the compact schema"
        );
        let compact = self.compact_payload(document, page)?;
        Ok(QrContent::Compact(compact))
    }

    /// Request URL against the external QR rendering endpoint
    pub fn request_url(&self, payload: &str) -> String {
        format!(
            "{}?size=200x200&data={}",
            self.config.qr_endpoint,
            urlencode(payload)
        )
    }

    fn full_payload(
        &self,
        document: &Document,
        signature: &SignatureRecord,
        generated_at: DateTime<Utc>,
    ) -> Result<String, PrintError> {
        let amount = |value: Option<Decimal>| value.map(|v| format_value(v).text);
        let payload = FullPayload {
            invoice_number: invoice_number(document),
            document_key: document.key.as_str(),
            doc_date: document.doc_date.map(display_date),
            due_date: document.due_date.map(display_date),
            generated_at: self.config.timezone.stamp(generated_at),
            customer_code: &document.customer.code,
            customer_name: &document.customer.name,
            subtotal: amount(document.financials.subtotal),
            discount: amount(document.financials.discount),
            tax_base: amount(document.financials.tax_base),
            tax: amount(document.financials.tax),
            grand_total: amount(document.financials.grand_total),
            currency: document.currency.code(),
            bank: document.bank.as_ref(),
            company: document.company.as_ref(),
            approver_name: &signature.name,
            approver_position: &signature.position,
            generated_by: "docflow-print",
        };
        Ok(serde_json::to_string(&payload)?)
    }

    fn compact_payload(
        &self,
        document: &Document,
        page: Option<(u32, u32)>,
    ) -> Result<String, PrintError> {
        let customer: String = document
            .customer
            .name
            .chars()
            .take(COMPACT_CUSTOMER_LIMIT)
            .collect();
        let (page, pages) = match page {
            // Final pages omit the pagination fields
            Some((number, total)) if number < total => (Some(number), Some(total)),
            _ => (None, None),
        };
        let payload = CompactPayload {
            invoice_number: invoice_number(document),
            amount: document
                .financials
                .grand_total
                .map(|v| format_value(v).text)
                .unwrap_or_else(|| "0.00".to_string()),
            currency: document.currency.code(),
            customer: &customer,
            date: document.doc_date.map(display_date),
            page,
            pages,
        };
        Ok(serde_json::to_string(&payload)?)
    }
}

fn invoice_number(document: &Document) -> String {
    match document.doc_number {
        Some(n) if n > 0 => n.to_string(),
        _ => document.key.to_string(),
    }
}

fn urlencode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len() * 3);
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain_document::DocumentKind;
    use rust_decimal_macros::dec;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 2, 0, 0).unwrap()
    }

    fn document() -> Document {
        let mut document = Document::staged(DocumentKind::ArInvoice, 42);
        document.doc_number = Some(1088);
        document.customer.code = "C-001".to_string();
        document.customer.name = "PT Maju Jaya".to_string();
        document.doc_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 18);
        document.financials.subtotal = Some(dec!(1000000));
        document.financials.discount = Some(dec!(0));
        document.financials.tax_base = Some(dec!(1000000));
        document.financials.tax = Some(dec!(110000));
        document.financials.grand_total = Some(dec!(1110000));
        document
    }

    fn signature() -> SignatureRecord {
        SignatureRecord {
            name: "Budi Santoso".to_string(),
            position: "Finance Director".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_small_payload_uses_the_full_schema() {
        let config = PrintConfig::default();
        let composer = QrComposer::new(&config);
        let content = composer
            .compose(&document(), &signature(), at(), None)
            .unwrap();

        match &content {
            QrContent::Full(json) => {
                assert!(json.contains("\"invoiceNumber\":\"1088\""));
                assert!(json.contains("\"grandTotal\":\"1,110,000.00\""));
                assert!(json.contains("\"approverName\":\"Budi Santoso\""));
            }
            other => panic!("expected full schema, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_payload_degrades_to_compact() {
        let mut config = PrintConfig::default();
        config.qr_payload_limit = 100;
        let composer = QrComposer::new(&config);

        let content = composer
            .compose(&document(), &signature(), at(), None)
            .unwrap();
        assert!(content.is_compact());
        assert!(content.content().len() <= 200);
    }

    #[test]
    fn test_compact_truncates_the_customer_name() {
        let mut config = PrintConfig::default();
        config.qr_payload_limit = 1;
        let composer = QrComposer::new(&config);

        let mut doc = document();
        doc.customer.name = "P".repeat(80);
        let content = composer.compose(&doc, &signature(), at(), None).unwrap();
        let json: serde_json::Value = serde_json::from_str(content.content()).unwrap();
        assert_eq!(json["customer"].as_str().unwrap().len(), 50);
    }

    #[test]
    fn test_compact_carries_page_fields_for_non_final_pages() {
        let mut config = PrintConfig::default();
        config.qr_payload_limit = 1;
        let composer = QrComposer::new(&config);

        let content = composer
            .compose(&document(), &signature(), at(), Some((1, 3)))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(content.content()).unwrap();
        assert_eq!(json["page"], 1);
        assert_eq!(json["pages"], 3);

        let last = composer
            .compose(&document(), &signature(), at(), Some((3, 3)))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(last.content()).unwrap();
        assert!(json.get("page").is_none());
    }

    #[test]
    fn test_prerendered_source_is_reused_verbatim() {
        let config = PrintConfig::default();
        let composer = QrComposer::new(&config);

        let mut doc = document();
        doc.qr_source = Some("https://qr.example/abc123".to_string());
        let content = composer.compose(&doc, &signature(), at(), None).unwrap();
        assert_eq!(
            content,
            QrContent::Prerendered("https://qr.example/abc123".to_string())
        );
    }

    #[test]
    fn test_oversized_url_also_degrades() {
        let mut config = PrintConfig::default();
        // Payload fits, but the encoded URL does not
        config.qr_url_limit = 200;
        let composer = QrComposer::new(&config);

        let content = composer
            .compose(&document(), &signature(), at(), None)
            .unwrap();
        assert!(content.is_compact());
    }

    #[test]
    fn test_urlencode_escapes_reserved_characters() {
        assert_eq!(urlencode("a b&c"), "a%20b%26c");
        assert_eq!(urlencode("safe-chars_1.0~"), "safe-chars_1.0~");
    }

    #[test]
    fn test_unnumbered_document_falls_back_to_the_key() {
        let mut doc = document();
        doc.doc_number = None;
        assert_eq!(invoice_number(&doc), "stg-42");
    }
}
