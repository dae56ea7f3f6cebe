//! Agent tracing domain types.
//!
//! Traces and spans are produced by the agent framework; each trace id embeds
//! the name of the agent that owns it (see [`make_trace_id`]). Log events are
//! derived from lifecycle transitions of traces and spans.

mod log_event;
mod span;
mod trace_id;

pub use log_event::{LogEvent, Phase, SPAN_CATEGORY, TRACE_CATEGORY};
pub use span::{Span, SpanData, SpanError, SpanKind, Trace};
pub use trace_id::{
    PAYLOAD_LEN, TRACE_ID_LEN, TRACE_ID_PREFIX, TraceIdError, extract_name, make_trace_id,
    make_trace_id_with,
};
