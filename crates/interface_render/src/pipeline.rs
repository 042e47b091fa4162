//! Print pipeline orchestration
//!
//! Pagination (including the cloning of structural blocks on the
//! surface) completes before any per-page population is scheduled;
//! population runs one tick later. Only the last page receives the
//! bank, financial-summary, signature, and QR blocks.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};

use domain_approval::ApprovalStatus;
use domain_document::Document;
use domain_print::{paginate, resolve_signature, Page, PrintConfig, QrComposer};

use crate::error::RenderError;
use crate::surface::RenderSurface;

/// Drives pagination and per-page population against the surface
pub struct PrintPipeline {
    surface: Arc<dyn RenderSurface>,
    config: PrintConfig,
}

impl PrintPipeline {
    pub fn new(surface: Arc<dyn RenderSurface>, config: PrintConfig) -> Self {
        Self { surface, config }
    }

    /// Paginates the document and populates the pages.
    ///
    /// `status` is the externally supplied status parameter governing
    /// signature-image disclosure.
    #[instrument(skip(self, document), fields(key = %document.key))]
    pub async fn render(
        &self,
        document: &Document,
        status: ApprovalStatus,
    ) -> Result<Vec<Page>, RenderError> {
        let pages = paginate(
            &document.lines,
            self.config.page_capacity,
            document.kind.profile(),
        );
        self.surface.create_pages(&pages);
        if pages.len() > 1 {
            // Totals migrate to the generated last page
            self.surface.suppress_first_page_summary();
        }

        // Page creation, including block cloning, settles before any
        // page content is written
        tokio::task::yield_now().await;

        let signature = resolve_signature(document, status);
        let composer = QrComposer::new(&self.config);
        let total = pages.len() as u32;

        for page in &pages {
            if page.carries_summary() {
                self.surface.populate_bank(page.number, document.bank.as_ref());
                self.surface.populate_summary(page.number, &document.financials);
                self.surface.populate_signature(&signature);
                let qr = composer.compose(document, &signature, Utc::now(), Some((page.number, total)))?;
                self.surface.populate_qr(page.number, &qr);
            }
        }

        debug!(pages = pages.len(), "print pages populated");
        Ok(pages)
    }
}
