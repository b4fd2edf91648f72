//! Business logic services
//!
//! Pure computation over domain models. These services have no I/O
//! dependencies except through port traits passed in by the caller.
//!
//! - [`extractor`] - Read and classify a coverage document
//! - [`differ`] - Compare rates against a baseline
//! - [`classifier`] - Map rates and diff to a level
//! - [`presenter`] - Render badge, status and comment
//! - [`publisher`] - Deliver a comment according to its mode

pub mod classifier;
pub mod differ;
pub mod extractor;
pub mod presenter;
pub mod publisher;

pub use classifier::classify;
pub use differ::diff;
pub use extractor::{ExtractOptions, extract, read_rates};
pub use presenter::{badge_url, comment_body, comment_header, status_payload};
pub use publisher::publish_comment;
