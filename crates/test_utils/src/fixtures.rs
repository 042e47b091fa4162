//! Pre-built Test Fixtures
//!
//! Ready-to-use, predictable test data for the entities the
//! document-approval suite works with.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::{Currency, DocumentKey, Money};
use domain_approval::{ActingUser, Actor};
use domain_document::{BankInfo, CompanyInfo, CustomerRef, DocumentFinancials};

/// Shared print-page blocks, built once per test binary
static STANDARD_BANK: Lazy<BankInfo> = Lazy::new(|| BankInfo {
    bank_name: "Bank Central Asia".to_string(),
    account_number: "1234567890".to_string(),
    account_name: "PT Sumber Rejeki".to_string(),
    swift_code: Some("CENAIDJA".to_string()),
});

static ISSUING_COMPANY: Lazy<CompanyInfo> = Lazy::new(|| CompanyInfo {
    name: "PT Sumber Rejeki".to_string(),
    address: "Jl. Sudirman No. 1, Jakarta".to_string(),
    phone: Some("+62-21-5551234".to_string()),
    tax_id: Some("01.234.567.8-901.000".to_string()),
});

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A round IDR unit price
    pub fn idr_price() -> Money {
        Money::new(dec!(250000), Currency::IDR)
    }

    /// A large IDR amount close to common invoice totals
    pub fn idr_total() -> Money {
        Money::new(dec!(1110000), Currency::IDR)
    }

    /// A USD amount for currency-variation tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for dates and timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A document date in the recent past
    pub fn doc_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 18).expect("valid date")
    }

    /// The matching due date, thirty days out
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 17).expect("valid date")
    }

    /// A fixed instant for deterministic stamping
    pub fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 20, 9, 30, 0).single().expect("valid instant")
    }
}

/// Fixture for actors in the approval chain
pub struct ActorFixtures;

impl ActorFixtures {
    /// The usual preparer
    pub fn preparer() -> ActingUser {
        ActingUser::new("17", "Siti Rahma")
    }

    /// An approver present in the signature asset table
    pub fn approver() -> Actor {
        Actor::new("31", "Budi Santoso")
    }

    /// A receiver present in the signature asset table
    pub fn receiver() -> Actor {
        Actor::new("44", "Agus Wibowo")
    }
}

/// Fixture for document header data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A staged document key
    pub fn staged_key() -> DocumentKey {
        DocumentKey::staged(42)
    }

    /// The usual customer
    pub fn customer() -> CustomerRef {
        CustomerRef {
            code: "C-001".to_string(),
            name: "PT Maju Jaya".to_string(),
        }
    }

    /// A complete financial set with a positive grand total
    pub fn complete_financials() -> DocumentFinancials {
        DocumentFinancials {
            subtotal: Some(dec!(1000000)),
            discount: Some(dec!(0)),
            tax_base: Some(dec!(1000000)),
            tax: Some(dec!(110000)),
            grand_total: Some(dec!(1110000)),
            currency: Currency::IDR,
        }
    }

    /// Payment instructions for the last print page
    pub fn bank() -> BankInfo {
        STANDARD_BANK.clone()
    }

    /// Issuing-company block
    pub fn company() -> CompanyInfo {
        ISSUING_COMPANY.clone()
    }
}
