//! Trace identifiers that carry the owning agent's name.
//!
//! Layout: `trace_` followed by a 32 character payload. The payload is the
//! tag, a literal `0` delimiter, then random lowercase alphanumerics.
//!
//! ```text
//! trace_alpha0k3j9x2m1q8w7e6r5t4y3u2i1o
//!       ^^^^^ tag
//!            ^ delimiter
//! ```
//!
//! A tag that itself contains `0` parses back as the part before its first
//! `0`. Callers choose tags without that digit.

use rand::Rng;
use thiserror::Error;

/// Prefix shared by every trace id.
pub const TRACE_ID_PREFIX: &str = "trace_";

/// Length of the payload after the prefix.
pub const PAYLOAD_LEN: usize = 32;

/// Total length of a trace id.
pub const TRACE_ID_LEN: usize = TRACE_ID_PREFIX.len() + PAYLOAD_LEN;

const DELIMITER: char = '0';

const ALPHANUM: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Errors from trace id generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceIdError {
    /// Tag plus delimiter does not fit in the payload.
    #[error("Tag is {len} characters; at most {max} fit in a trace id", max = PAYLOAD_LEN - 1)]
    TagTooLong {
        /// Length of the rejected tag.
        len: usize,
    },

    /// Tag is empty or contains characters that break parsing.
    #[error("Invalid trace tag '{0}': must be non-empty ASCII without '_'")]
    InvalidTag(String),
}

/// Build a trace id for `tag` using the thread-local RNG.
pub fn make_trace_id(tag: &str) -> Result<String, TraceIdError> {
    make_trace_id_with(tag, &mut rand::rng())
}

/// Build a trace id for `tag`, drawing the padding from `rng`.
pub fn make_trace_id_with<R: Rng>(tag: &str, rng: &mut R) -> Result<String, TraceIdError> {
    if tag.is_empty() || !tag.is_ascii() || tag.contains('_') {
        return Err(TraceIdError::InvalidTag(tag.to_string()));
    }
    if tag.len() + 1 > PAYLOAD_LEN {
        return Err(TraceIdError::TagTooLong { len: tag.len() });
    }

    let pad_len = PAYLOAD_LEN - tag.len() - 1;
    let mut id = String::with_capacity(TRACE_ID_LEN);
    id.push_str(TRACE_ID_PREFIX);
    id.push_str(tag);
    id.push(DELIMITER);
    id.extend((0..pad_len).map(|_| char::from(ALPHANUM[rng.random_range(0..ALPHANUM.len())])));
    Ok(id)
}

/// Extract the agent name embedded in a trace id.
///
/// Takes the segment between the first and second `_` (or the end), then the
/// part of it before the first `0`. Returns `None` for ids without either
/// separator in that segment, or with an empty name, which marks the trace as
/// not ours.
#[must_use]
pub fn extract_name(trace_id: &str) -> Option<&str> {
    let (_, rest) = trace_id.split_once('_')?;
    let payload = rest.split('_').next()?;
    let (name, _) = payload.split_once(DELIMITER)?;
    (!name.is_empty()).then_some(name)
}
