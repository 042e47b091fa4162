//! Signature resolution
//!
//! The printed signature block names an approver and their title; the
//! signature image itself is disclosed only on Approved documents. For
//! every other status (Received included) the name and position still
//! print without an image.

use once_cell::sync::Lazy;
use serde::Serialize;

use domain_approval::{ApprovalRole, ApprovalStatus};
use domain_document::Document;

/// Entry of the static name-to-asset table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureAsset {
    pub name: &'static str,
    pub title: &'static str,
    pub image_ref: &'static str,
}

/// Signers with registered signature images
static SIGNATURE_ASSETS: Lazy<Vec<SignatureAsset>> = Lazy::new(|| {
    vec![
        SignatureAsset {
            name: "Budi Santoso",
            title: "Finance Director",
            image_ref: "signatures/budi-santoso.png",
        },
        SignatureAsset {
            name: "Dewi Kartika Sari",
            title: "Finance Manager",
            image_ref: "signatures/dewi-kartika.png",
        },
        SignatureAsset {
            name: "Agus Wibowo",
            title: "General Manager",
            image_ref: "signatures/agus-wibowo.png",
        },
        SignatureAsset {
            name: "Ratna Puspita",
            title: "Accounting Supervisor",
            image_ref: "signatures/ratna-puspita.png",
        },
    ]
});

/// Render-time signature value object
///
/// Recomputed from the approval summary and status on every
/// population; never part of the persisted document state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureRecord {
    pub name: String,
    pub position: String,
    /// Asset reference, present only for Approved documents with a
    /// matching table entry
    pub image: Option<String>,
}

impl SignatureRecord {
    /// True when no signer could be resolved
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Looks up a signer in the asset table.
///
/// Case-insensitive: an exact full-name match wins, then substring
/// containment in either direction. No match is not an error.
pub fn lookup_asset(name: &str) -> Option<&'static SignatureAsset> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    SIGNATURE_ASSETS
        .iter()
        .find(|asset| asset.name.to_lowercase() == needle)
        .or_else(|| {
            SIGNATURE_ASSETS.iter().find(|asset| {
                let entry = asset.name.to_lowercase();
                entry.contains(&needle) || needle.contains(&entry)
            })
        })
}

/// Resolves the signature record for a document under the supplied
/// status parameter.
///
/// Source cascade, first non-empty name wins: approval "approved" actor,
/// document-level approved-by, approval "received" actor (position
/// forced to "Receiver"), document-level received-by (also "Receiver"),
/// approval "prepared" actor (position forced to "Prepared By"), then
/// the empty record. Positions not forced by the cascade come from the
/// asset table title, with "Approver" as the fallback.
pub fn resolve_signature(document: &Document, status: ApprovalStatus) -> SignatureRecord {
    let approval = document.approval.as_ref();
    let actor_name = |role: ApprovalRole| {
        approval
            .and_then(|a| a.actor(role))
            .map(|actor| actor.name.clone())
    };
    let approved_actor = actor_name(ApprovalRole::Approved);
    let received_actor = actor_name(ApprovalRole::Received);
    let prepared_actor = actor_name(ApprovalRole::Prepared);

    let (name, forced_position) = if let Some(name) = non_empty(approved_actor) {
        (name, None)
    } else if let Some(name) = non_empty(document.approved_by.clone()) {
        (name, None)
    } else if let Some(name) = non_empty(received_actor) {
        (name, Some("Receiver"))
    } else if let Some(name) = non_empty(document.received_by.clone()) {
        (name, Some("Receiver"))
    } else if let Some(name) = non_empty(prepared_actor) {
        (name, Some("Prepared By"))
    } else {
        return SignatureRecord::default();
    };

    let asset = lookup_asset(&name);
    let position = forced_position
        .map(str::to_string)
        .or_else(|| asset.map(|a| a.title.to_string()))
        .unwrap_or_else(|| "Approver".to_string());

    // The image is disclosed only on Approved documents
    let image = if status == ApprovalStatus::Approved {
        asset.map(|a| a.image_ref.to_string())
    } else {
        None
    };

    SignatureRecord {
        name,
        position,
        image,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_approval::{Actor, ApprovalSummary};
    use domain_document::DocumentKind;

    fn document_with_approved(name: &str) -> Document {
        let mut document = Document::staged(DocumentKind::ArInvoice, 1);
        document.approval = Some(ApprovalSummary {
            approved: Some(Actor::new("31", name)),
            approval_status: Some("Approved".to_string()),
            ..Default::default()
        });
        document
    }

    #[test]
    fn test_approved_status_discloses_the_image() {
        let document = document_with_approved("Budi Santoso");
        let record = resolve_signature(&document, ApprovalStatus::Approved);

        assert_eq!(record.name, "Budi Santoso");
        assert_eq!(record.position, "Finance Director");
        assert_eq!(record.image.as_deref(), Some("signatures/budi-santoso.png"));
    }

    #[test]
    fn test_received_status_shows_name_but_no_image() {
        let document = document_with_approved("Budi Santoso");
        let record = resolve_signature(&document, ApprovalStatus::Received);

        assert_eq!(record.name, "Budi Santoso");
        assert!(!record.position.is_empty());
        assert!(record.image.is_none());
    }

    #[test]
    fn test_cascade_falls_back_to_document_level_approver() {
        let mut document = Document::staged(DocumentKind::Settlement, 2);
        document.approved_by = Some("Dewi Kartika Sari".to_string());

        let record = resolve_signature(&document, ApprovalStatus::Approved);
        assert_eq!(record.name, "Dewi Kartika Sari");
        assert_eq!(record.position, "Finance Manager");
        assert!(record.image.is_some());
    }

    #[test]
    fn test_received_actor_position_is_forced() {
        let mut document = Document::staged(DocumentKind::OutgoingPayment, 3);
        document.approval = Some(ApprovalSummary {
            received: Some(Actor::new("44", "Agus Wibowo")),
            ..Default::default()
        });

        let record = resolve_signature(&document, ApprovalStatus::Approved);
        assert_eq!(record.name, "Agus Wibowo");
        assert_eq!(record.position, "Receiver");
        // Forced position does not suppress the Approved-status image
        assert!(record.image.is_some());
    }

    #[test]
    fn test_prepared_actor_is_the_last_resort() {
        let mut document = Document::staged(DocumentKind::Reimbursement, 4);
        document.approval = Some(ApprovalSummary {
            prepared: Some(Actor::new("17", "Siti Rahma")),
            ..Default::default()
        });

        let record = resolve_signature(&document, ApprovalStatus::Draft);
        assert_eq!(record.name, "Siti Rahma");
        assert_eq!(record.position, "Prepared By");
        assert!(record.image.is_none());
    }

    #[test]
    fn test_no_source_yields_the_empty_record() {
        let document = Document::staged(DocumentKind::ArInvoice, 5);
        let record = resolve_signature(&document, ApprovalStatus::Approved);
        assert!(record.is_empty());
        assert!(record.image.is_none());
    }

    #[test]
    fn test_unknown_name_prints_without_image() {
        let document = document_with_approved("Joko Susilo");
        let record = resolve_signature(&document, ApprovalStatus::Approved);
        assert_eq!(record.name, "Joko Susilo");
        assert_eq!(record.position, "Approver");
        assert!(record.image.is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(lookup_asset("BUDI SANTOSO").is_some());
        assert!(lookup_asset("budi santoso").is_some());
    }

    #[test]
    fn test_lookup_matches_substrings_both_ways() {
        // Partial name against a full table entry
        assert_eq!(lookup_asset("Dewi Kartika").map(|a| a.name), Some("Dewi Kartika Sari"));
        // Fuller name than the table entry
        assert_eq!(
            lookup_asset("Bpk. Agus Wibowo").map(|a| a.name),
            Some("Agus Wibowo")
        );
    }

    #[test]
    fn test_lookup_rejects_blank_names() {
        assert!(lookup_asset("").is_none());
        assert!(lookup_asset("   ").is_none());
    }
}
