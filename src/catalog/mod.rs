//! Assessment catalog: typed records, the embedded index, and the loading policy.
//!
//! - [`CatalogStore`] loads records (cache → live listing → seed).
//! - [`CatalogIndex`] pairs each record with its embedding.
//! - [`CatalogHandle`] publishes the current index to concurrent requests and swaps it
//!   atomically on reload.

pub mod error;
pub mod handle;
pub mod index;
pub mod record;
pub mod scrape;
pub mod seed;
pub mod source;
pub mod store;


pub use error::{CatalogError, CatalogResult};
pub use handle::{CatalogHandle, ReloadOutcome};
pub use index::{CatalogIndex, fingerprint};
pub use record::{AssessmentRecord, TestType};
pub use scrape::parse_listing;
pub use seed::seed_catalog;
#[cfg(any(test, feature = "mock"))]
pub use source::MockCatalogSource;
pub use source::{CatalogSource, HttpCatalogSource};
pub use store::{CatalogOrigin, CatalogStore};
