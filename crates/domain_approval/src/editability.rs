//! Field-group editability derived from status

use serde::Serialize;

use crate::status::{ApprovalStatus, BadgeColor};

/// Badge presented in place of editable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: BadgeColor,
}

/// Declarative enablement map for the four field groups a document form
/// exposes
///
/// The map is a pure projection of status: Draft enables everything and
/// shows no badge; every other status freezes all groups and presents a
/// color-coded badge instead. The gate never mutates status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Editability {
    pub actor_fields: bool,
    pub remarks: bool,
    pub attachments: bool,
    pub line_items: bool,
    pub badge: Option<StatusBadge>,
}

impl Editability {
    /// Computes the enablement map for a status
    pub fn for_status(status: ApprovalStatus) -> Self {
        let editable = status.is_editable();
        Self {
            actor_fields: editable,
            remarks: editable,
            attachments: editable,
            line_items: editable,
            badge: if editable {
                None
            } else {
                Some(StatusBadge {
                    label: status.as_str(),
                    color: status.badge_color(),
                })
            },
        }
    }

    /// True when every field group is enabled
    pub fn is_fully_editable(&self) -> bool {
        self.actor_fields && self.remarks && self.attachments && self.line_items
    }
}
