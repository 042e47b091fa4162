//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that stays
//! inside the domain invariants, plus fake-data helpers for names.

use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, AMOUNT_CEILING};
use domain_approval::ApprovalStatus;
use domain_document::{DocumentKind, LineItem};

/// Strategy for amounts within the formatting ceiling
///
/// Generates two-decimal values across the full accepted range,
/// including the manual-grouping territory above one trillion.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000_000_000_000, 0u32..100).prop_map(|(units, cents)| {
        let amount = Decimal::from(units) + Decimal::new(cents as i64, 2);
        amount.min(AMOUNT_CEILING)
    })
}

/// Strategy for any of the seven canonical statuses
pub fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Draft),
        Just(ApprovalStatus::Prepared),
        Just(ApprovalStatus::Checked),
        Just(ApprovalStatus::Acknowledged),
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Received),
        Just(ApprovalStatus::Rejected),
    ]
}

/// Strategy for any document sub-type
pub fn kind_strategy() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::ArInvoice),
        Just(DocumentKind::OutgoingPayment),
        Just(DocumentKind::Settlement),
        Just(DocumentKind::Reimbursement),
    ]
}

/// Strategy for a list of valid line items
pub fn line_items_strategy(max: usize) -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((1u32..100, 1i64..10_000_000), 0..max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (quantity, price))| LineItem {
                line_no: (i + 1) as u32,
                item_code: format!("ITM-{:03}", i + 1),
                description: format!("Generated item {}", i + 1),
                quantity: Decimal::from(quantity),
                unit: None,
                unit_price: Money::new(Decimal::from(price), Currency::IDR),
                discount: None,
            })
            .collect()
    })
}

/// A random person name for actor fields
pub fn fake_person_name() -> String {
    Name().fake()
}

/// A random company name for customer fields
pub fn fake_company_name() -> String {
    CompanyName().fake()
}
