//! Percent-encoding for URL path segments.
//!
//! Base identifiers and table names are interpolated into the resource path
//! (`{base_url}/{base_id}/{table}`). Table names commonly contain spaces and
//! may contain `/` or `?`, so each segment is encoded before joining.
//!
//! ```
//! use airtable_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Business Database"), "Business%20Database");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in a single path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
