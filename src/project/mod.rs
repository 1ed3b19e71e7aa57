//! Project-level plumbing: policy configuration, catalog loading and
//! batch checking of annotated members.

mod catalog_loader;
mod checker;
mod policy;

pub use catalog_loader::{CatalogLoader, LoadError};
pub use checker::{AlternativesChecker, AnnotatedMember, CheckReport, FlagEntry, Finding, PolicyError};
pub use policy::{FLAG_UNSUPPORTED, PolicyConfig};
