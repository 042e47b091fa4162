//! Document financial summary and completeness

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Currency;

/// Named financial fields of a document
///
/// Every field is optional because back-end payloads leave them null
/// or empty until calculation completes; the completeness check below
/// decides whether the set can be trusted for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFinancials {
    pub subtotal: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub tax_base: Option<Decimal>,
    pub tax: Option<Decimal>,
    pub grand_total: Option<Decimal>,
    pub currency: Currency,
}

impl DocumentFinancials {
    /// True iff all five fields are present and at least one of them is
    /// strictly positive.
    ///
    /// Gates whether a cached payload is trustworthy enough to render
    /// the financial summary without a fresher fetch: an all-present
    /// but all-zero set is still not authoritative.
    pub fn is_complete(&self) -> bool {
        let fields = [
            self.subtotal,
            self.discount,
            self.tax_base,
            self.tax,
            self.grand_total,
        ];
        fields.iter().all(Option::is_some)
            && fields.iter().any(|f| f.map_or(false, |v| v > Decimal::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn complete() -> DocumentFinancials {
        DocumentFinancials {
            subtotal: Some(dec!(1000000)),
            discount: Some(dec!(0)),
            tax_base: Some(dec!(1000000)),
            tax: Some(dec!(110000)),
            grand_total: Some(dec!(1110000)),
            currency: Currency::IDR,
        }
    }

    #[test]
    fn test_all_present_with_positive_total_is_complete() {
        assert!(complete().is_complete());
    }

    #[test]
    fn test_missing_tax_base_is_incomplete_even_when_rest_positive() {
        let mut financials = complete();
        financials.tax_base = None;
        assert!(!financials.is_complete());
    }

    #[test]
    fn test_all_zero_is_incomplete() {
        let financials = DocumentFinancials {
            subtotal: Some(dec!(0)),
            discount: Some(dec!(0)),
            tax_base: Some(dec!(0)),
            tax: Some(dec!(0)),
            grand_total: Some(dec!(0)),
            currency: Currency::IDR,
        };
        assert!(!financials.is_complete());
    }

    #[test]
    fn test_default_is_incomplete() {
        assert!(!DocumentFinancials::default().is_complete());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&complete()).unwrap();
        assert!(json.contains("\"taxBase\""));
        assert!(json.contains("\"grandTotal\""));
    }
}
