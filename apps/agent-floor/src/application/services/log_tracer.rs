//! Trace processor that records agent activity in the log store.
//!
//! Only traces whose id embeds an agent name (see
//! [`crate::domain::trace::make_trace_id`]) are recorded; everything else is
//! dropped silently.

use std::sync::Arc;

use crate::application::ports::{LogStorePort, StorageError, TraceProcessor};
use crate::domain::trace::{LogEvent, Phase, Span, Trace, extract_name};

/// Writes one log line per trace/span start and end.
#[derive(Debug)]
pub struct LogTracer<L> {
    store: Arc<L>,
}

impl<L: LogStorePort> LogTracer<L> {
    /// Create a tracer writing to `store`.
    pub const fn new(store: Arc<L>) -> Self {
        Self { store }
    }

    /// Agent name embedded in a trace id, if any.
    pub fn get_name(trace_id: &str) -> Option<&str> {
        extract_name(trace_id)
    }

    fn record_trace(&self, trace: &Trace, phase: Phase) -> Result<(), StorageError> {
        let Some(name) = Self::get_name(&trace.trace_id) else {
            tracing::trace!(trace_id = %trace.trace_id, "Skipping trace without agent name");
            return Ok(());
        };
        self.store.write_log(&LogEvent::for_trace(name, phase, trace))
    }

    fn record_span(&self, span: &Span, phase: Phase) -> Result<(), StorageError> {
        let Some(name) = Self::get_name(&span.trace_id) else {
            tracing::trace!(
                trace_id = %span.trace_id,
                span_id = %span.span_id,
                "Skipping span without agent name"
            );
            return Ok(());
        };
        self.store.write_log(&LogEvent::for_span(name, phase, span))
    }
}

impl<L: LogStorePort> TraceProcessor for LogTracer<L> {
    fn on_trace_start(&self, trace: &Trace) -> Result<(), StorageError> {
        self.record_trace(trace, Phase::Started)
    }

    fn on_trace_end(&self, trace: &Trace) -> Result<(), StorageError> {
        self.record_trace(trace, Phase::Ended)
    }

    fn on_span_start(&self, span: &Span) -> Result<(), StorageError> {
        self.record_span(span, Phase::Started)
    }

    fn on_span_end(&self, span: &Span) -> Result<(), StorageError> {
        self.record_span(span, Phase::Ended)
    }

    // Writes go straight to the store; nothing is buffered.
    fn force_flush(&self) {}

    fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trace::{SpanData, SpanKind, make_trace_id};
    use crate::infrastructure::persistence::InMemoryLogStore;

    struct FailingStore;

    impl LogStorePort for FailingStore {
        fn write_log(&self, _event: &LogEvent) -> Result<(), StorageError> {
            Err(StorageError::Unavailable {
                message: "disk full".to_string(),
            })
        }
    }

    #[test]
    fn trace_start_and_end_are_logged_under_agent_name() {
        let store = Arc::new(InMemoryLogStore::new());
        let tracer = LogTracer::new(Arc::clone(&store));
        let trace = Trace::new(make_trace_id("alpha").unwrap(), "alpha-trading");

        tracer.on_trace_start(&trace).unwrap();
        tracer.on_trace_end(&trace).unwrap();

        let events = store.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], LogEvent::new("alpha", "trace", "Started: alpha-trading"));
        assert_eq!(events[1], LogEvent::new("alpha", "trace", "Ended: alpha-trading"));
    }

    #[test]
    fn span_is_logged_under_its_kind() {
        let store = Arc::new(InMemoryLogStore::new());
        let tracer = LogTracer::new(Arc::clone(&store));
        let span = Span::new(make_trace_id("alpha").unwrap(), "span_1")
            .with_data(SpanData::new(SpanKind::Function).with_name("lookup_share_price"));

        tracer.on_span_end(&span).unwrap();

        assert_eq!(
            store.events(),
            vec![LogEvent::new("alpha", "function", "Ended function lookup_share_price")]
        );
    }

    #[test]
    fn foreign_trace_ids_are_dropped() {
        let store = Arc::new(InMemoryLogStore::new());
        let tracer = LogTracer::new(Arc::clone(&store));
        let trace = Trace::new("trace_abcdefghijklmnopqrstuvwxyz123456", "other");

        tracer.on_trace_start(&trace).unwrap();
        tracer.on_span_start(&Span::new(trace.trace_id, "span_1")).unwrap();

        assert!(store.events().is_empty());
    }

    #[test]
    fn storage_failures_propagate() {
        let tracer = LogTracer::new(Arc::new(FailingStore));
        let trace = Trace::new(make_trace_id("alpha").unwrap(), "alpha-trading");

        assert!(matches!(
            tracer.on_trace_start(&trace),
            Err(StorageError::Unavailable { .. })
        ));
    }

    #[test]
    fn foreign_ids_never_reach_failing_store() {
        let tracer = LogTracer::new(Arc::new(FailingStore));
        let trace = Trace::new("trace_nodelimiter", "other");

        assert!(tracer.on_trace_end(&trace).is_ok());
    }

    #[test]
    fn flush_and_shutdown_are_noops() {
        let store = Arc::new(InMemoryLogStore::new());
        let tracer = LogTracer::new(Arc::clone(&store));
        tracer.force_flush();
        tracer.shutdown();
        assert!(store.events().is_empty());
    }
}
