//! Rejection flow
//!
//! Couples the reject operation to the required view refresh: a
//! successful rejection invalidates the cached entry (inside the
//! service) and then reloads the document so the surface reflects the
//! Rejected state.

use std::sync::Arc;

use tracing::instrument;

use domain_approval::{ActingUser, RemarkDraft};
use domain_document::{ApprovalService, Document};

use crate::error::RenderError;
use crate::loader::{LoadCoordinator, LoadOutcome};

/// Reject-and-reload workflow
pub struct RejectFlow {
    service: Arc<ApprovalService>,
    coordinator: Arc<LoadCoordinator>,
}

impl RejectFlow {
    pub fn new(service: Arc<ApprovalService>, coordinator: Arc<LoadCoordinator>) -> Self {
        Self { service, coordinator }
    }

    /// Rejects the document, then triggers a full reload of the view.
    ///
    /// A refused rejection (non-Draft status, empty remark body)
    /// returns the error without touching the view.
    #[instrument(skip_all, fields(key = %document.key))]
    pub async fn reject(
        &self,
        document: &Document,
        actor: &ActingUser,
        remark: &RemarkDraft,
        status_param: &str,
    ) -> Result<LoadOutcome, RenderError> {
        self.service.reject(document, actor, remark).await?;
        Ok(self
            .coordinator
            .load(document.kind, &document.key, status_param)
            .await)
    }
}
