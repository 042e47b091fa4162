//! Line-item pagination
//!
//! Pages are computed fresh on every render and never mutated in
//! place: any change to the line items regenerates the whole set.

use serde::Serialize;

use domain_document::{KindProfile, LineItem};

/// Placeholder row shown on an empty first page, spanning the full
/// column count of the kind's item table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderRow {
    pub span: u32,
    pub text: &'static str,
}

/// One print page
///
/// Exactly one page per document has `is_last = true`; only that page
/// carries the bank-instruction, financial-summary, signature, and QR
/// blocks. Every page carries the header/shipping/order-numbers block
/// plus its item slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Contiguous slice of the document's lines, in print order
    pub items: Vec<LineItem>,
    pub is_last: bool,
    pub placeholder: Option<PlaceholderRow>,
}

impl Page {
    /// True when this page carries the totals/signature/QR blocks
    pub fn carries_summary(&self) -> bool {
        self.is_last
    }
}

/// Splits lines into fixed-capacity pages.
///
/// Page count is `ceil(len / capacity)` with a minimum of one: an empty
/// line list still yields page 1, carrying the placeholder row. A zero
/// capacity is treated as one item per page.
pub fn paginate(lines: &[LineItem], capacity: usize, profile: &KindProfile) -> Vec<Page> {
    let capacity = capacity.max(1);

    if lines.is_empty() {
        return vec![Page {
            number: 1,
            items: Vec::new(),
            is_last: true,
            placeholder: Some(PlaceholderRow {
                span: profile.placeholder_span,
                text: "No items to display",
            }),
        }];
    }

    let page_count = lines.len().div_ceil(capacity);
    lines
        .chunks(capacity)
        .enumerate()
        .map(|(index, chunk)| Page {
            number: (index + 1) as u32,
            items: chunk.to_vec(),
            is_last: index + 1 == page_count,
            placeholder: None,
        })
        .collect()
}
