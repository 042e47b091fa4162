//! Print finalization
//!
//! Runs after pagination and population have both finished: removes
//! pages the surface reports empty, then locks print-safe sizing and
//! page-break control.

use std::sync::Arc;

use tracing::{debug, instrument};

use domain_print::PageLayout;

use crate::surface::RenderSurface;

/// Final pass before the physical print
pub struct PrintFinalizer {
    surface: Arc<dyn RenderSurface>,
    layout: PageLayout,
}

impl PrintFinalizer {
    pub fn new(surface: Arc<dyn RenderSurface>, layout: PageLayout) -> Self {
        Self { surface, layout }
    }

    /// Removes empty pages and applies the print layout
    #[instrument(skip(self))]
    pub fn finalize(&self) {
        let empty = self.surface.empty_pages();
        for page in &empty {
            self.surface.remove_page(*page);
        }
        if !empty.is_empty() {
            debug!(removed = empty.len(), "empty pages removed");
        }
        self.surface.apply_layout(&self.layout);
    }
}
