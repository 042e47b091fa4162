//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than the standard macros.

use domain_document::LineItem;
use domain_print::Page;

/// Asserts the structural pagination invariants: at least one page,
/// 1-based contiguous numbering, and exactly one last page.
pub fn assert_pagination_invariants(pages: &[Page]) {
    assert!(!pages.is_empty(), "pagination must yield at least one page");

    for (index, page) in pages.iter().enumerate() {
        assert_eq!(
            page.number as usize,
            index + 1,
            "page numbers must be 1-based and contiguous, found {} at index {}",
            page.number,
            index
        );
    }

    let last_count = pages.iter().filter(|p| p.is_last).count();
    assert_eq!(
        last_count, 1,
        "exactly one page must be marked last, found {}",
        last_count
    );
    assert!(
        pages.last().map_or(false, |p| p.is_last),
        "the final page must carry the last marker"
    );
}

/// Asserts that concatenating the pages' items reproduces the original
/// line order exactly.
pub fn assert_pages_preserve_order(pages: &[Page], lines: &[LineItem]) {
    let rejoined: Vec<&LineItem> = pages.iter().flat_map(|p| p.items.iter()).collect();
    assert_eq!(
        rejoined.len(),
        lines.len(),
        "pages carry {} items but the document has {}",
        rejoined.len(),
        lines.len()
    );
    for (index, (paged, original)) in rejoined.iter().zip(lines.iter()).enumerate() {
        assert_eq!(
            *paged, original,
            "item order diverges at position {}",
            index
        );
    }
}
