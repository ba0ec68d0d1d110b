//! I/O shell around `generiq-core`.
//!
//! Everything external and fragile lives here: loading the published
//! price dataset over HTTP (cached for the process lifetime), the
//! pill-image lookup routed through a public CORS relay, and the
//! debounced scheduling used by search-as-you-type callers. The two
//! external dependencies sit behind capability traits
//! ([`CatalogSource`], [`ImageSource`]) so [`DrugService`] - and through
//! it the core resolution logic - never touches network details.
//!
//! Failure policy, end to end: nothing here is fatal. An unreachable or
//! malformed dataset degrades to the built-in sample set; a failed image
//! lookup is logged and forgotten.

pub mod catalog;
pub mod debounce;
pub mod image;
pub mod service;

pub use catalog::{CatalogError, CatalogSource, StaticDbClient};
pub use debounce::Debouncer;
pub use image::{ImageSource, NoImages, PillImageClient};
pub use service::{DataStatus, DrugService};
