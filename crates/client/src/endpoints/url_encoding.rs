//! Percent-encoding for saved object ids, role names and space ids.
//!
//! Ids are interpolated into URL paths, so a `/` or `?` in an id would change
//! the resource addressed. Every caller-supplied path segment goes through
//! [`encode_path_segment`].
//!
//! ```
//! use kibana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("logstash-*"), "logstash-*");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a path segment (RFC 3986 section 3.3 plus the
/// characters reqwest would otherwise interpret).
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

pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
