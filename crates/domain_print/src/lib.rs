//! Print Domain
//!
//! Turns a loaded document into paginated, signature-stamped, QR-coded
//! print pages. This crate owns the algorithmic half of printing:
//! splitting line items into fixed-capacity pages, deciding which page
//! carries the totals/signature/QR blocks, resolving the signature
//! record with its disclosure rule, composing the QR payload under the
//! size limits, and the paper/page-break layout rules. The rendering
//! surface itself lives behind a port in `interface_render`.

pub mod paginate;
pub mod signature;
pub mod qr;
pub mod layout;
pub mod config;
pub mod error;

pub use paginate::{paginate, Page, PlaceholderRow};
pub use signature::{lookup_asset, resolve_signature, SignatureAsset, SignatureRecord};
pub use qr::{QrComposer, QrContent};
pub use layout::{PageLayout, PaperSize};
pub use config::PrintConfig;
pub use error::PrintError;
