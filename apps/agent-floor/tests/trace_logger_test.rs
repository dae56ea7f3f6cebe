//! Trace Logger Integration Tests
//!
//! Trace id generation and parsing, and the log lines a full agent run
//! produces through the trace processor callbacks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use proptest::prelude::*;
use test_case::test_case;

use agent_floor::{
    InMemoryLogStore, LogEvent, LogTracer, Span, SpanData, SpanError, SpanKind, Trace,
    TraceIdError, TraceProcessor, extract_name, make_trace_id,
};

fn tracer() -> (Arc<InMemoryLogStore>, LogTracer<InMemoryLogStore>) {
    let store = Arc::new(InMemoryLogStore::new());
    let tracer = LogTracer::new(Arc::clone(&store));
    (store, tracer)
}

fn messages(store: &InMemoryLogStore, name: &str) -> Vec<String> {
    store
        .read_log(name, usize::MAX)
        .into_iter()
        .map(|e| e.message)
        .collect()
}

// =============================================================================
// Trace ids
// =============================================================================

#[test_case("trace_agent1abc0xyz", Some("agent1abc") ; "name before first zero")]
#[test_case("trace_agent007", Some("agent") ; "zero inside tag truncates")]
#[test_case("trace_warren0", Some("warren") ; "delimiter at end")]
#[test_case("traceabc0def", None ; "no underscore")]
#[test_case("trace_abcdef", None ; "no zero")]
#[test_case("trace_0abc", None ; "empty name")]
#[test_case("trace_ab_cd0xyz", None ; "zero only after second underscore")]
#[test_case("trace_ab0c_d0e", Some("ab") ; "segment before second underscore")]
#[test_case("", None ; "empty id")]
fn extract_name_cases(trace_id: &str, expected: Option<&str>) {
    assert_eq!(extract_name(trace_id), expected);
    assert_eq!(LogTracer::<InMemoryLogStore>::get_name(trace_id), expected);
}

#[test]
fn overlong_tag_is_rejected() {
    let tag = "a".repeat(32);
    assert_eq!(make_trace_id(&tag), Err(TraceIdError::TagTooLong { len: 32 }));
    assert!(make_trace_id(&"a".repeat(31)).is_ok());
}

#[test_case("" ; "empty")]
#[test_case("warren_buffett" ; "underscore")]
#[test_case("günther" ; "non ascii")]
fn invalid_tag_is_rejected(tag: &str) {
    assert!(matches!(make_trace_id(tag), Err(TraceIdError::InvalidTag(_))));
}

proptest! {
    #[test]
    fn generated_id_round_trips(tag in "[a-z1-9]{1,31}") {
        let id = make_trace_id(&tag).unwrap();
        prop_assert_eq!(id.len(), 38);
        prop_assert!(id.starts_with("trace_"));
        prop_assert_eq!(extract_name(&id), Some(tag.as_str()));
    }

    #[test]
    fn ids_without_zero_have_no_name(payload in "[a-z1-9]{0,32}") {
        let id = format!("trace_{payload}");
        prop_assert_eq!(extract_name(&id), None);
    }
}

// =============================================================================
// Log lines
// =============================================================================

#[test]
fn generation_span_mentions_name_and_server() {
    let (store, tracer) = tracer();
    let span = Span::new("trace_bob0zz", "span_1").with_data(
        SpanData::new(SpanKind::Generation)
            .with_name("gen1")
            .with_server("srv1"),
    );

    tracer.on_span_start(&span).unwrap();

    assert_eq!(
        store.events(),
        vec![LogEvent::new("bob", "generation", "Started generation gen1 srv1")]
    );
}

#[test]
fn ids_with_extra_underscores_are_not_attributed() {
    let (store, tracer) = tracer();
    let trace = Trace::new("trace_ab_cd0xyz", "framework-internal");

    tracer.on_trace_start(&trace).unwrap();
    tracer
        .on_span_start(&Span::new(trace.trace_id.clone(), "span_1"))
        .unwrap();

    assert!(store.is_empty());
}

#[test]
fn span_without_data_uses_generic_category() {
    let (store, tracer) = tracer();
    tracer
        .on_span_end(&Span::new("trace_bob0zz", "span_2"))
        .unwrap();

    assert_eq!(store.events(), vec![LogEvent::new("bob", "span", "Ended")]);
}

#[test]
fn span_error_is_appended() {
    let (store, tracer) = tracer();
    let span = Span::new("trace_bob0zz", "span_3")
        .with_data(SpanData::new(SpanKind::Function).with_name("buy_shares"))
        .with_error(SpanError::new("Insufficient funds"));

    tracer.on_span_end(&span).unwrap();

    assert_eq!(
        messages(&store, "bob"),
        vec!["Ended function buy_shares Insufficient funds"]
    );
}

#[test]
fn unrecognized_kind_is_logged_verbatim() {
    let (store, tracer) = tracer();
    let span = Span::new("trace_bob0zz", "span_4")
        .with_data(SpanData::new(SpanKind::parse("reasoning")).with_name(""));

    tracer.on_span_start(&span).unwrap();

    assert_eq!(
        store.events(),
        vec![LogEvent::new("bob", "reasoning", "Started reasoning")]
    );
}

#[test]
fn full_agent_run_is_recorded_in_order() {
    let (store, tracer) = tracer();
    let trace_id = make_trace_id("warren").unwrap();
    let trace = Trace::new(trace_id.clone(), "warren-trading");
    let agent = Span::new(trace_id.clone(), "span_agent")
        .with_data(SpanData::new(SpanKind::Agent).with_name("Warren"));
    let tool = Span::new(trace_id.clone(), "span_tool")
        .with_parent("span_agent")
        .with_data(
            SpanData::new(SpanKind::McpTools)
                .with_name("lookup_share_price")
                .with_server("accounts"),
        );

    tracer.on_trace_start(&trace).unwrap();
    tracer.on_span_start(&agent).unwrap();
    tracer.on_span_start(&tool).unwrap();
    tracer.on_span_end(&tool).unwrap();
    tracer.on_span_end(&agent).unwrap();
    tracer.on_trace_end(&trace).unwrap();
    tracer.force_flush();
    tracer.shutdown();

    assert_eq!(
        messages(&store, "warren"),
        vec![
            "Started: warren-trading",
            "Started agent Warren",
            "Started mcp_tools lookup_share_price accounts",
            "Ended mcp_tools lookup_share_price accounts",
            "Ended agent Warren",
            "Ended: warren-trading",
        ]
    );
    assert_eq!(store.read_log("warren", 2).len(), 2);
}

#[test]
fn runs_of_different_agents_stay_separate() {
    let (store, tracer) = tracer();
    let warren = Trace::new(make_trace_id("warren").unwrap(), "warren-trading");
    let cathie = Trace::new(make_trace_id("cathie").unwrap(), "cathie-trading");
    let foreign = Trace::new("trace_3f2a9c1d", "framework-internal");

    tracer.on_trace_start(&warren).unwrap();
    tracer.on_trace_start(&cathie).unwrap();
    tracer.on_trace_start(&foreign).unwrap();

    assert_eq!(messages(&store, "warren"), vec!["Started: warren-trading"]);
    assert_eq!(messages(&store, "cathie"), vec!["Started: cathie-trading"]);
    assert_eq!(store.len(), 2);
}
