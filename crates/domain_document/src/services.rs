//! Approval service
//!
//! Orchestrates the two status-changing operations against the document
//! port: submit (Draft to Prepared) and reject (Draft to Rejected).
//! Validation happens before any network call; the cache entry is
//! invalidated only after a successful PATCH; attachment upload is
//! best-effort and never undoes a completed status change.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use core_kernel::{NoticeKind, Notifier};
use domain_approval::{reject, submit, ActingUser, ApprovalSummary, RemarkDraft};

use crate::document::Document;
use crate::error::DocumentError;
use crate::ports::{ApprovalPatch, AttachmentUpload, DocumentPort};
use crate::cache::DocumentCache;

/// Service for the submit and reject operations
pub struct ApprovalService {
    port: Arc<dyn DocumentPort>,
    cache: Arc<dyn DocumentCache>,
    notifier: Arc<dyn Notifier>,
}

impl ApprovalService {
    /// Creates a new service over the given port, cache, and notifier
    pub fn new(
        port: Arc<dyn DocumentPort>,
        cache: Arc<dyn DocumentCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            port,
            cache,
            notifier,
        }
    }

    /// Submits a Draft document for approval, promoting it to Prepared.
    ///
    /// Header and line validation runs before any network call; a
    /// failed attachment upload after a successful PATCH is surfaced as
    /// a warning but does not fail the submission.
    #[instrument(skip(self, document, files), fields(key = %document.key))]
    pub async fn submit(
        &self,
        document: &Document,
        actor: &ActingUser,
        files: Vec<AttachmentUpload>,
    ) -> Result<ApprovalSummary, DocumentError> {
        let issues = validate_for_submit(document);
        if !issues.is_empty() {
            self.notifier
                .notify(NoticeKind::Error, &issues.join("; "));
            return Err(DocumentError::Validation { issues });
        }

        let updated = submit(document.approval.as_ref(), document.status(), actor, Utc::now())
            .map_err(|error| {
                self.notifier.notify(NoticeKind::Error, &error.to_string());
                error
            })?;

        let patch = ApprovalPatch::from_summary(&updated);
        let saved = self
            .port
            .patch_approval(document.kind, &document.key, &patch)
            .await
            .map_err(|error| {
                self.notifier.notify(NoticeKind::Error, &error.to_string());
                error
            })?;

        self.cache.invalidate(&document.key).await;
        info!(key = %document.key, "document submitted for approval");
        self.notifier.notify(
            NoticeKind::Success,
            &format!("{} submitted for approval", document.kind),
        );

        if !files.is_empty() {
            if let Err(error) = self
                .port
                .upload_attachments(document.kind, &document.key, files)
                .await
            {
                warn!(key = %document.key, %error, "attachment upload failed after submit");
                self.notifier.notify(
                    NoticeKind::Warning,
                    "Document was submitted, but attachments failed to upload",
                );
            }
        }

        Ok(saved)
    }

    /// Rejects a Draft document with a mandatory attributed remark.
    ///
    /// Refused locally (no PATCH issued) when the document is not in
    /// Draft or the remark has no body.
    #[instrument(skip(self, document, remark), fields(key = %document.key))]
    pub async fn reject(
        &self,
        document: &Document,
        actor: &ActingUser,
        remark: &RemarkDraft,
    ) -> Result<ApprovalSummary, DocumentError> {
        let updated = reject(
            document.approval.as_ref(),
            document.status(),
            actor,
            remark,
            Utc::now(),
        )
        .map_err(|error| {
            self.notifier.notify(NoticeKind::Error, &error.to_string());
            error
        })?;

        let patch = ApprovalPatch::from_summary(&updated);
        let saved = self
            .port
            .patch_approval(document.kind, &document.key, &patch)
            .await
            .map_err(|error| {
                self.notifier.notify(NoticeKind::Error, &error.to_string());
                error
            })?;

        self.cache.invalidate(&document.key).await;
        info!(key = %document.key, "document rejected");
        self.notifier
            .notify(NoticeKind::Success, &format!("{} rejected", document.kind));
        Ok(saved)
    }
}

/// Itemized pre-submit validation, one message per missing field
pub fn validate_for_submit(document: &Document) -> Vec<String> {
    let mut issues = Vec::new();
    if document.customer.name.trim().is_empty() {
        issues.push("Customer name is required".to_string());
    }
    if document.doc_date.is_none() {
        issues.push("Document date is required".to_string());
    }
    if document.valid_line_count() == 0 {
        issues.push("At least one valid line item is required".to_string());
    }
    issues
}
