//! Log lines derived from trace and span lifecycle transitions.

use serde::{Deserialize, Serialize};

use super::span::{Span, Trace};

/// Category used for trace-level events.
pub const TRACE_CATEGORY: &str = "trace";

/// Category used for spans without typed data.
pub const SPAN_CATEGORY: &str = "span";

/// Lifecycle transition being logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Work began.
    Started,
    /// Work finished.
    Ended,
}

impl Phase {
    const fn label(self) -> &'static str {
        match self {
            Self::Started => "Started",
            Self::Ended => "Ended",
        }
    }
}

/// One append-only log line, attributed to an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Agent name the line belongs to.
    pub name: String,
    /// `trace`, `span`, or the span kind.
    #[serde(rename = "type")]
    pub category: String,
    /// Free-form message.
    pub message: String,
}

impl LogEvent {
    /// Create a log event.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            message: message.into(),
        }
    }

    /// `Started: <trace name>` / `Ended: <trace name>` under the trace category.
    #[must_use]
    pub fn for_trace(name: &str, phase: Phase, trace: &Trace) -> Self {
        Self::new(
            name,
            TRACE_CATEGORY,
            format!("{}: {}", phase.label(), trace.name),
        )
    }

    /// `Started`/`Ended` followed by the span kind, name, server and error,
    /// each only when present.
    #[must_use]
    pub fn for_span(name: &str, phase: Phase, span: &Span) -> Self {
        let category = span
            .span_data
            .as_ref()
            .map_or(SPAN_CATEGORY, |data| data.kind.as_str());

        let mut message = phase.label().to_string();
        if let Some(data) = &span.span_data {
            let parts = [Some(data.kind.as_str()), data.name.as_deref(), data.server.as_deref()];
            for part in parts.into_iter().flatten().filter(|p| !p.is_empty()) {
                message.push(' ');
                message.push_str(part);
            }
        }
        if let Some(error) = &span.error {
            message.push(' ');
            message.push_str(&error.to_string());
        }

        Self::new(name, category, message)
    }
}
