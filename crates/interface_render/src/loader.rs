//! Single-flight document loading
//!
//! One load may be in flight at a time; a second request while the
//! guard is held is ignored, not queued and not cancelled. Sources are
//! consulted in a strict priority order and the first accepted result
//! short-circuits the rest.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, instrument, warn};

use core_kernel::{DocumentKey, NoticeKind, Notifier, PortError};
use domain_approval::ApprovalStatus;
use domain_document::{Document, DocumentCache, DocumentKind, DocumentPort};
use domain_print::{resolve_signature, PrintConfig};

use crate::surface::RenderSurface;

/// Owned guard state for one page lifetime
///
/// Replaces the ambient global flags of the original form scripts with
/// an explicit context object, so the single-flight guarantee is
/// testable without a browser.
#[derive(Debug, Default)]
pub struct LoadState {
    loading: AtomicBool,
    signature_applied: AtomicBool,
}

impl LoadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the load guard; false when a load is already in flight
    pub fn begin(&self) -> bool {
        self.loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Releases the load guard
    pub fn finish(&self) {
        self.loading.store(false, Ordering::SeqCst);
    }

    /// True while a load holds the guard
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Claims the signature guard; false when already applied this cycle
    pub fn try_mark_signature(&self) -> bool {
        self.signature_applied
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Clears the signature guard for an explicit force-repopulate
    pub fn clear_signature(&self) {
        self.signature_applied.store(false, Ordering::SeqCst);
    }

    /// True once the signature has been populated this cycle
    pub fn signature_applied(&self) -> bool {
        self.signature_applied.load(Ordering::SeqCst)
    }
}

/// In-memory handoff from an opener/parent execution context
#[derive(Debug, Default)]
pub struct HandoffSlot {
    slot: Mutex<Option<Document>>,
}

impl HandoffSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a document for the next load
    pub async fn offer(&self, document: Document) {
        *self.slot.lock().await = Some(document);
    }

    /// Takes the offered document, emptying the slot
    pub async fn take(&self) -> Option<Document> {
        self.slot.lock().await.take()
    }
}

/// Which source satisfied a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Handoff,
    Cache,
    Fetched,
}

/// Result of a coordinated load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Another load holds the guard; this request was ignored
    InFlight,
    Loaded {
        document: Document,
        source: LoadSource,
    },
    Failed,
}

/// Priority-ordered, single-flight document loader
pub struct LoadCoordinator {
    state: Arc<LoadState>,
    handoff: Arc<HandoffSlot>,
    port: Arc<dyn DocumentPort>,
    cache: Arc<dyn DocumentCache>,
    surface: Arc<dyn RenderSurface>,
    notifier: Arc<dyn Notifier>,
    config: PrintConfig,
}

impl LoadCoordinator {
    pub fn new(
        state: Arc<LoadState>,
        handoff: Arc<HandoffSlot>,
        port: Arc<dyn DocumentPort>,
        cache: Arc<dyn DocumentCache>,
        surface: Arc<dyn RenderSurface>,
        notifier: Arc<dyn Notifier>,
        config: PrintConfig,
    ) -> Self {
        Self {
            state,
            handoff,
            port,
            cache,
            surface,
            notifier,
            config,
        }
    }

    /// The guard state, shared with force-repopulate callers
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Loads a document and populates the surface.
    ///
    /// The guard is released on every path, success or failure.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn load(
        &self,
        kind: DocumentKind,
        key: &DocumentKey,
        status_param: &str,
    ) -> LoadOutcome {
        if !self.state.begin() {
            debug!("load already in flight, ignoring duplicate request");
            return LoadOutcome::InFlight;
        }
        let outcome = self.run(kind, key, status_param).await;
        self.state.finish();
        outcome
    }

    async fn run(&self, kind: DocumentKind, key: &DocumentKey, status_param: &str) -> LoadOutcome {
        self.surface.ready().await;
        self.surface.set_loading(true);

        match self.resolve(kind, key).await {
            Ok((document, source)) => {
                self.surface.set_loading(false);
                self.surface.populate_document(&document);
                self.surface.apply_editability(&document.editability());
                let status = ApprovalStatus::parse_lenient(status_param);
                if status == ApprovalStatus::Approved {
                    self.populate_signature(&document, status, false).await;
                }
                debug!(?source, "document resolved");
                LoadOutcome::Loaded { document, source }
            }
            Err(err) => {
                self.surface.set_loading(false);
                error!(%err, "document load failed");
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    /// Strictly sequential priority cascade: opener handoff, then the
    /// durable cache (only when financially complete), then the details
    /// endpoint, which writes back to the cache.
    async fn resolve(
        &self,
        kind: DocumentKind,
        key: &DocumentKey,
    ) -> Result<(Document, LoadSource), PortError> {
        if let Some(document) = self.handoff.take().await {
            return Ok((document, LoadSource::Handoff));
        }

        if let Some(document) = self.cache.get(key).await {
            if document.financials.is_complete() {
                return Ok((document, LoadSource::Cache));
            }
            debug!("cached entry is financially incomplete, fetching fresh");
        }

        let document = self.port.fetch_details(kind, key).await?;
        self.cache.put(document.clone()).await;
        Ok((document, LoadSource::Fetched))
    }

    /// Populates the signature block, once per load cycle.
    ///
    /// The image is disclosed only when `status` is Approved. After the
    /// configured delay the surface is re-checked: when the name, or an
    /// image the record carries, is missing, population runs one more
    /// time. `force` clears the cycle guard first.
    pub async fn populate_signature(
        &self,
        document: &Document,
        status: ApprovalStatus,
        force: bool,
    ) {
        if force {
            self.state.clear_signature();
        }
        if !self.state.try_mark_signature() {
            debug!("signature already applied this cycle, skipping");
            return;
        }

        let record = resolve_signature(document, status);
        self.surface.populate_signature(&record);

        tokio::time::sleep(self.config.signature_retry()).await;
        let shown = self.surface.signature_state();
        let incomplete = !shown.has_name || (record.image.is_some() && !shown.has_image);
        if incomplete {
            warn!("signature block incomplete after populate, repopulating once");
            self.surface.populate_signature(&record);
        }
    }
}
