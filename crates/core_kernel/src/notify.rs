//! User-notification port
//!
//! The modal/notification widget is an external collaborator; the core
//! only emits `(kind, message)` pairs through this port and never renders
//! anything itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, info, warn};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        };
        write!(f, "{}", label)
    }
}

/// Port for surfacing user-visible notices
///
/// Implementations decide how a notice is presented; the core decides
/// only when one is raised.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that forwards notices to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success | NoticeKind::Info => info!(notice = %kind, "{}", message),
            NoticeKind::Warning => warn!(notice = %kind, "{}", message),
            NoticeKind::Error => error!(notice = %kind, "{}", message),
        }
    }
}

/// Mock notifier for testing
///
/// Records every notice in memory so tests can assert on what was
/// surfaced and how often.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::{NoticeKind, Notifier};
    use std::sync::Mutex;

    /// In-memory recording implementation of Notifier
    #[derive(Debug, Default)]
    pub struct CapturingNotifier {
        notices: Mutex<Vec<(NoticeKind, String)>>,
    }

    impl CapturingNotifier {
        /// Creates a new capturing notifier
        pub fn new() -> Self {
            Self::default()
        }

        /// Returns all recorded notices in arrival order
        pub fn notices(&self) -> Vec<(NoticeKind, String)> {
            self.notices.lock().expect("notifier lock poisoned").clone()
        }

        /// Counts recorded notices of the given kind
        pub fn count_of(&self, kind: NoticeKind) -> usize {
            self.notices
                .lock()
                .expect("notifier lock poisoned")
                .iter()
                .filter(|(k, _)| *k == kind)
                .count()
        }

        /// Clears all recorded notices
        pub fn clear(&self) {
            self.notices.lock().expect("notifier lock poisoned").clear();
        }
    }

    impl Notifier for CapturingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices
                .lock()
                .expect("notifier lock poisoned")
                .push((kind, message.to_string()));
        }
    }
}
