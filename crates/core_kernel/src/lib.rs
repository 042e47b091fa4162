//! Core Kernel - Foundational types and utilities for the document-approval system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Display-amount formatting with grouping and a maximum-amount ceiling
//! - Strongly-typed document identifiers
//! - The notification port and shared port infrastructure

pub mod money;
pub mod format;
pub mod temporal;
pub mod identifiers;
pub mod notify;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Rate};
pub use format::{FormattedAmount, format_amount, format_amount_notified, format_value, parse_amount, AMOUNT_CEILING};
pub use temporal::Timezone;
pub use identifiers::{DocumentKey, AttachmentId};
pub use notify::{Notifier, NoticeKind, TracingNotifier};
pub use ports::{PortError, DomainPort};
