//! Print-safe layout rules

use serde::{Deserialize, Serialize};

/// Physical paper dimensions in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperSize {
    pub width_mm: u32,
    pub height_mm: u32,
}

impl PaperSize {
    /// ISO A4
    pub const A4: PaperSize = PaperSize {
        width_mm: 210,
        height_mm: 297,
    };
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Page-break policy for one page container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBreaks {
    pub break_before: bool,
    pub break_after: bool,
}

/// Layout the finalizer locks in before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub paper: PaperSize,
}

impl PageLayout {
    pub fn new(paper: PaperSize) -> Self {
        Self { paper }
    }

    /// Break policy for a page: break before every page except the
    /// first, never break after
    pub fn breaks_for(&self, page_number: u32) -> PageBreaks {
        PageBreaks {
            break_before: page_number > 1,
            break_after: false,
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(PaperSize::A4)
    }
}
