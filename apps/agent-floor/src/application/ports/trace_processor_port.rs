//! Trace Processor Port (Driver Port)
//!
//! Callbacks the agent framework's global tracing provider invokes, in order,
//! for every trace and span. Calls are synchronous and on the caller's thread.

use super::market_store_port::StorageError;
use crate::domain::trace::{Span, Trace};

/// Receiver of trace and span lifecycle events.
pub trait TraceProcessor: Send + Sync {
    /// A trace began.
    fn on_trace_start(&self, trace: &Trace) -> Result<(), StorageError>;

    /// A trace finished.
    fn on_trace_end(&self, trace: &Trace) -> Result<(), StorageError>;

    /// A span began.
    fn on_span_start(&self, span: &Span) -> Result<(), StorageError>;

    /// A span finished.
    fn on_span_end(&self, span: &Span) -> Result<(), StorageError>;

    /// Flush buffered events.
    fn force_flush(&self);

    /// Release resources.
    fn shutdown(&self);
}
