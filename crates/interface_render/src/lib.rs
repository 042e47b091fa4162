//! Render Interface
//!
//! Composition layer between the domains and the form-rendering
//! surface. The surface (form fields, page containers, badges) is an
//! external collaborator behind the `RenderSurface` port; this crate
//! owns when it is driven: the single-flight `LoadCoordinator`, the
//! print pipeline that paginates and populates pages, the finalizer
//! that locks the layout for printing, and the reject flow.

pub mod surface;
pub mod loader;
pub mod pipeline;
pub mod finalize;
pub mod flow;
pub mod error;

pub use surface::{RenderSurface, SignatureState};
pub use loader::{HandoffSlot, LoadCoordinator, LoadOutcome, LoadSource, LoadState};
pub use pipeline::PrintPipeline;
pub use finalize::PrintFinalizer;
pub use flow::RejectFlow;
pub use error::RenderError;
