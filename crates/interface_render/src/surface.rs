//! Render-surface port
//!
//! One interface covers all four document sub-types; kind-specific
//! differences reach the surface as data (`KindProfile`, placeholder
//! spans, page content), never as separate code paths. The surface owns
//! the markup; this port only reads and writes it.

use async_trait::async_trait;

use domain_approval::Editability;
use domain_document::{BankInfo, Document, DocumentFinancials};
use domain_print::{Page, PageLayout, QrContent, SignatureRecord};

/// What the surface currently shows in the signature block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignatureState {
    pub has_name: bool,
    pub has_image: bool,
}

/// Port to the form-rendering surface
#[async_trait]
pub trait RenderSurface: Send + Sync {
    /// Resolves once the surface is ready to be driven.
    ///
    /// The coordinator awaits this exactly once per load instead of
    /// polling for element readiness.
    async fn ready(&self);

    /// Shows or clears the loading indicator
    fn set_loading(&self, on: bool);

    /// Writes the enablement map and status badge to the form fields
    fn apply_editability(&self, map: &Editability);

    /// Populates the form from a loaded document
    fn populate_document(&self, document: &Document);

    /// Creates page containers; containers beyond the first clone the
    /// structural blocks (header, invoice detail, shipping info, order
    /// numbers) from page 1
    fn create_pages(&self, pages: &[Page]);

    /// Suppresses the default first-page summary blocks when the
    /// totals migrate to a generated last page
    fn suppress_first_page_summary(&self);

    /// Writes the bank-instruction block on a page
    fn populate_bank(&self, page: u32, bank: Option<&BankInfo>);

    /// Writes the financial-summary block on a page
    fn populate_summary(&self, page: u32, financials: &DocumentFinancials);

    /// Writes the signature block
    fn populate_signature(&self, record: &SignatureRecord);

    /// Reports what the signature block currently shows
    fn signature_state(&self) -> SignatureState;

    /// Writes the QR block on a page
    fn populate_qr(&self, page: u32, content: &QrContent);

    /// Numbers of pages the surface reports empty
    fn empty_pages(&self) -> Vec<u32>;

    /// Removes a page container
    fn remove_page(&self, page: u32);

    /// Applies print-safe sizing and page-break control
    fn apply_layout(&self, layout: &PageLayout);
}

/// Mock surface for testing
///
/// Records every call so scenario tests can assert on ordering,
/// idempotence, and what each page received. The signature block can be
/// configured to drop the image on its first population, exercising the
/// verification retry.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use core_kernel::format_value;

    /// One recorded surface call
    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceCall {
        SetLoading(bool),
        ApplyEditability(Editability),
        PopulateDocument(String),
        CreatePages(usize),
        SuppressFirstPageSummary,
        PopulateBank(u32),
        /// Page number and the formatted grand total written to it
        PopulateSummary(u32, String),
        PopulateSignature(SignatureRecord),
        PopulateQr(u32, String),
        RemovePage(u32),
        ApplyLayout(PageLayout),
    }

    /// Recording implementation of RenderSurface
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        calls: Mutex<Vec<SurfaceCall>>,
        editability: Mutex<Option<Editability>>,
        signature: Mutex<Option<SignatureRecord>>,
        signature_populations: AtomicUsize,
        drop_first_signature_image: AtomicBool,
        empty_pages: Mutex<Vec<u32>>,
        loading: AtomicBool,
    }

    impl RecordingSurface {
        /// Creates a new recording surface
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes the first signature population lose its image, as a
        /// not-yet-rendered image slot would
        pub fn drop_first_signature_image(&self) {
            self.drop_first_signature_image.store(true, Ordering::SeqCst);
        }

        /// Marks pages the surface will report as empty
        pub fn mark_empty_pages(&self, pages: Vec<u32>) {
            *self.empty_pages.lock().expect("surface lock poisoned") = pages;
        }

        /// All recorded calls in arrival order
        pub fn calls(&self) -> Vec<SurfaceCall> {
            self.calls.lock().expect("surface lock poisoned").clone()
        }

        /// Field enablement currently applied
        pub fn editability(&self) -> Option<Editability> {
            *self.editability.lock().expect("surface lock poisoned")
        }

        /// How many times the signature block was populated
        pub fn signature_populations(&self) -> usize {
            self.signature_populations.load(Ordering::SeqCst)
        }

        /// True while the loading indicator shows
        pub fn is_loading(&self) -> bool {
            self.loading.load(Ordering::SeqCst)
        }

        fn record(&self, call: SurfaceCall) {
            self.calls.lock().expect("surface lock poisoned").push(call);
        }
    }

    #[async_trait]
    impl RenderSurface for RecordingSurface {
        async fn ready(&self) {}

        fn set_loading(&self, on: bool) {
            self.loading.store(on, Ordering::SeqCst);
            self.record(SurfaceCall::SetLoading(on));
        }

        fn apply_editability(&self, map: &Editability) {
            *self.editability.lock().expect("surface lock poisoned") = Some(*map);
            self.record(SurfaceCall::ApplyEditability(*map));
        }

        fn populate_document(&self, document: &Document) {
            self.record(SurfaceCall::PopulateDocument(document.key.to_string()));
        }

        fn create_pages(&self, pages: &[Page]) {
            self.record(SurfaceCall::CreatePages(pages.len()));
        }

        fn suppress_first_page_summary(&self) {
            self.record(SurfaceCall::SuppressFirstPageSummary);
        }

        fn populate_bank(&self, page: u32, _bank: Option<&BankInfo>) {
            self.record(SurfaceCall::PopulateBank(page));
        }

        fn populate_summary(&self, page: u32, financials: &DocumentFinancials) {
            let total = financials
                .grand_total
                .map(|v| format_value(v).text)
                .unwrap_or_else(|| "0.00".to_string());
            self.record(SurfaceCall::PopulateSummary(page, total));
        }

        fn populate_signature(&self, record: &SignatureRecord) {
            self.signature_populations.fetch_add(1, Ordering::SeqCst);
            let mut stored = record.clone();
            if self.drop_first_signature_image.swap(false, Ordering::SeqCst) {
                stored.image = None;
            }
            *self.signature.lock().expect("surface lock poisoned") = Some(stored.clone());
            self.record(SurfaceCall::PopulateSignature(stored));
        }

        fn signature_state(&self) -> SignatureState {
            match self.signature.lock().expect("surface lock poisoned").as_ref() {
                Some(record) => SignatureState {
                    has_name: !record.name.is_empty(),
                    has_image: record.image.is_some(),
                },
                None => SignatureState::default(),
            }
        }

        fn populate_qr(&self, page: u32, content: &QrContent) {
            self.record(SurfaceCall::PopulateQr(page, content.content().to_string()));
        }

        fn empty_pages(&self) -> Vec<u32> {
            self.empty_pages.lock().expect("surface lock poisoned").clone()
        }

        fn remove_page(&self, page: u32) {
            self.record(SurfaceCall::RemovePage(page));
        }

        fn apply_layout(&self, layout: &PageLayout) {
            self.record(SurfaceCall::ApplyLayout(*layout));
        }
    }
}
