//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the pure coverage engine
//! and external systems (report files, the review host, baseline storage).
//!
//! Implementations live in the `adapters` module and are passed in
//! explicitly by the caller.

mod baseline_store;
mod document_source;
mod review_host;

pub use baseline_store::BaselineStore;
pub use document_source::DocumentSource;
pub use review_host::{ReviewComment, ReviewHost};
