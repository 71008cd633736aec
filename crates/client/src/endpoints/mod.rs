//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP call and returns either the
//! parsed payload or a classified [`crate::ClientError`].

mod records;
mod request;
pub mod url_encoding;

pub use records::{list_records, update_records};
pub use request::{extract_records, send_request};
