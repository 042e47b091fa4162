//! Document domain ports
//!
//! The `DocumentPort` trait covers everything the domain needs from the
//! back end: the details fetch, the approval PATCH, and the attachment
//! upload. Adapters translate the wire envelope; the mock adapter backs
//! tests and counts calls so single-flight behavior stays observable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentKey, DomainPort, PortError};
use domain_approval::{ApprovalSummary, Actor};

use crate::document::{Attachment, Document};
use crate::kind::DocumentKind;

/// Response envelope shared by every back-end endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: None,
        }
    }

    /// Wraps a back-end refusal
    pub fn refused(message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps the payload, mapping refusals and malformed envelopes to
    /// port errors
    pub fn into_data(self, what: &str) -> Result<T, PortError> {
        if !self.status {
            let message = self
                .message
                .unwrap_or_else(|| format!("{} request refused by the back end", what));
            return Err(PortError::internal(message));
        }
        self.data
            .ok_or_else(|| PortError::transformation(format!("{} envelope is missing data", what)))
    }
}

/// Body of the approval PATCH request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPatch {
    pub approval_status: String,
    pub prepared_by: Option<String>,
    pub prepared_by_name: Option<String>,
    pub checked_by: Option<String>,
    pub checked_by_name: Option<String>,
    pub acknowledged_by: Option<String>,
    pub acknowledged_by_name: Option<String>,
    pub approved_by: Option<String>,
    pub approved_by_name: Option<String>,
    pub received_by: Option<String>,
    pub received_by_name: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub prepared_date: Option<DateTime<Utc>>,
    pub rejected_date: Option<DateTime<Utc>>,
    pub rejection_remarks: Option<String>,
}

impl ApprovalPatch {
    /// Flattens an approval summary into the PATCH body shape
    pub fn from_summary(summary: &ApprovalSummary) -> Self {
        fn split(actor: &Option<Actor>) -> (Option<String>, Option<String>) {
            match actor {
                Some(a) => (Some(a.id.clone()), Some(a.name.clone())),
                None => (None, None),
            }
        }
        let (prepared_by, prepared_by_name) = split(&summary.prepared);
        let (checked_by, checked_by_name) = split(&summary.checked);
        let (acknowledged_by, acknowledged_by_name) = split(&summary.acknowledged);
        let (approved_by, approved_by_name) = split(&summary.approved);
        let (received_by, received_by_name) = split(&summary.received);

        Self {
            approval_status: summary.approval_status.clone().unwrap_or_default(),
            prepared_by,
            prepared_by_name,
            checked_by,
            checked_by_name,
            acknowledged_by,
            acknowledged_by_name,
            approved_by,
            approved_by_name,
            received_by,
            received_by_name,
            updated_at: summary.updated_at,
            prepared_date: summary.prepared_date,
            rejected_date: summary.rejected_date,
            rejection_remarks: summary.rejection_remarks.clone(),
        }
    }
}

/// A file queued for multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Port to the document back end
#[async_trait]
pub trait DocumentPort: DomainPort {
    /// Fetches a document from the canonical details endpoint
    async fn fetch_details(
        &self,
        kind: DocumentKind,
        key: &DocumentKey,
    ) -> Result<Document, PortError>;

    /// Applies an approval patch and returns the stored summary
    async fn patch_approval(
        &self,
        kind: DocumentKind,
        key: &DocumentKey,
        patch: &ApprovalPatch,
    ) -> Result<ApprovalSummary, PortError>;

    /// Uploads attachments for a document
    async fn upload_attachments(
        &self,
        kind: DocumentKind,
        key: &DocumentKey,
        files: Vec<AttachmentUpload>,
    ) -> Result<Vec<Attachment>, PortError>;
}

/// Mock adapter for testing
///
/// Serves documents from memory through the same envelope translation a
/// real adapter performs, counts fetches, records patches, and can be
/// configured to delay or fail individual operations.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    use core_kernel::AttachmentId;

    /// In-memory mock implementation of DocumentPort
    #[derive(Debug, Default)]
    pub struct MockDocumentPort {
        documents: Arc<RwLock<HashMap<DocumentKey, Document>>>,
        patches: Arc<RwLock<Vec<(DocumentKey, ApprovalPatch)>>>,
        fetch_count: AtomicUsize,
        fetch_delay: RwLock<Option<Duration>>,
        fail_fetch: AtomicBool,
        fail_upload: AtomicBool,
    }

    impl MockDocumentPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with documents for testing
        pub async fn with_documents(documents: Vec<Document>) -> Self {
            let port = Self::new();
            for document in documents {
                port.documents
                    .write()
                    .await
                    .insert(document.key.clone(), document);
            }
            port
        }

        /// Delays every fetch, so tests can overlap two loads
        pub async fn set_fetch_delay(&self, delay: Duration) {
            *self.fetch_delay.write().await = Some(delay);
        }

        /// Makes every fetch fail with a connection error
        pub fn set_fail_fetch(&self, fail: bool) {
            self.fail_fetch.store(fail, Ordering::SeqCst);
        }

        /// Makes every upload fail with a connection error
        pub fn set_fail_upload(&self, fail: bool) {
            self.fail_upload.store(fail, Ordering::SeqCst);
        }

        /// Number of detail fetches served or attempted
        pub fn fetch_count(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }

        /// All approval patches received, in arrival order
        pub async fn patches(&self) -> Vec<(DocumentKey, ApprovalPatch)> {
            self.patches.read().await.clone()
        }
    }

    impl DomainPort for MockDocumentPort {}

    #[async_trait]
    impl DocumentPort for MockDocumentPort {
        async fn fetch_details(
            &self,
            _kind: DocumentKind,
            key: &DocumentKey,
        ) -> Result<Document, PortError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            let delay = *self.fetch_delay.read().await;
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(PortError::connection("fetch failed"));
            }
            let envelope = match self.documents.read().await.get(key).cloned() {
                Some(document) => Envelope::ok(document),
                None => return Err(PortError::not_found("Document", key)),
            };
            envelope.into_data("details")
        }

        async fn patch_approval(
            &self,
            _kind: DocumentKind,
            key: &DocumentKey,
            patch: &ApprovalPatch,
        ) -> Result<ApprovalSummary, PortError> {
            self.patches
                .write()
                .await
                .push((key.clone(), patch.clone()));

            let mut documents = self.documents.write().await;
            let document = documents
                .get_mut(key)
                .ok_or_else(|| PortError::not_found("Document", key))?;

            fn join(id: &Option<String>, name: &Option<String>) -> Option<Actor> {
                match (id, name) {
                    (Some(id), Some(name)) => Some(Actor::new(id.clone(), name.clone())),
                    _ => None,
                }
            }
            let summary = ApprovalSummary {
                prepared: join(&patch.prepared_by, &patch.prepared_by_name),
                checked: join(&patch.checked_by, &patch.checked_by_name),
                acknowledged: join(&patch.acknowledged_by, &patch.acknowledged_by_name),
                approved: join(&patch.approved_by, &patch.approved_by_name),
                received: join(&patch.received_by, &patch.received_by_name),
                approval_status: Some(patch.approval_status.clone()),
                rejection_remarks: patch.rejection_remarks.clone(),
                rejected_date: patch.rejected_date,
                prepared_date: patch.prepared_date,
                updated_at: patch.updated_at,
            };
            document.approval = Some(summary.clone());
            Envelope::ok(summary).into_data("approval")
        }

        async fn upload_attachments(
            &self,
            _kind: DocumentKind,
            key: &DocumentKey,
            files: Vec<AttachmentUpload>,
        ) -> Result<Vec<Attachment>, PortError> {
            if self.fail_upload.load(Ordering::SeqCst) {
                return Err(PortError::connection("upload failed"));
            }
            let uploaded: Vec<Attachment> = files
                .into_iter()
                .map(|file| Attachment {
                    id: AttachmentId::new(),
                    file_name: file.file_name,
                    url: None,
                    uploaded_at: Utc::now(),
                })
                .collect();

            let mut documents = self.documents.write().await;
            if let Some(document) = documents.get_mut(key) {
                document.attachments.extend(uploaded.clone());
            }
            Envelope::ok(uploaded).into_data("attachments")
        }
    }
}
