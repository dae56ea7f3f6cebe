//! Traces and spans as delivered by the agent framework.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level trace: one agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Trace identifier, see [`super::make_trace_id`].
    pub trace_id: String,
    /// Display name of the workflow.
    pub name: String,
}

impl Trace {
    /// Create a trace.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            name: name.into(),
        }
    }
}

/// Kind of work a span records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpanKind {
    /// An agent turn.
    Agent,
    /// A tool/function call.
    Function,
    /// A model generation.
    Generation,
    /// A model response.
    Response,
    /// A handoff between agents.
    Handoff,
    /// A user-defined span.
    Custom,
    /// A guardrail check.
    Guardrail,
    /// Tool listing from an MCP server.
    McpTools,
    /// Speech-to-text.
    Transcription,
    /// Text-to-speech.
    Speech,
    /// A group of speech spans.
    SpeechGroup,
    /// Any kind this crate does not know about.
    Other(String),
}

impl SpanKind {
    /// Wire name of the kind; also the log category for the span.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Agent => "agent",
            Self::Function => "function",
            Self::Generation => "generation",
            Self::Response => "response",
            Self::Handoff => "handoff",
            Self::Custom => "custom",
            Self::Guardrail => "guardrail",
            Self::McpTools => "mcp_tools",
            Self::Transcription => "transcription",
            Self::Speech => "speech",
            Self::SpeechGroup => "speech_group",
            Self::Other(kind) => kind.as_str(),
        }
    }

    /// Parse a wire name. Unknown names become [`SpanKind::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "agent" => Self::Agent,
            "function" => Self::Function,
            "generation" => Self::Generation,
            "response" => Self::Response,
            "handoff" => Self::Handoff,
            "custom" => Self::Custom,
            "guardrail" => Self::Guardrail,
            "mcp_tools" => Self::McpTools,
            "transcription" => Self::Transcription,
            "speech" => Self::Speech,
            "speech_group" => Self::SpeechGroup,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SpanKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SpanKind> for String {
    fn from(kind: SpanKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Typed payload of a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanData {
    /// Span kind.
    #[serde(rename = "type")]
    pub kind: SpanKind,
    /// Name of the agent, function, guardrail, etc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MCP server the span talked to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl SpanData {
    /// Span data of the given kind with no optional fields.
    #[must_use]
    pub const fn new(kind: SpanKind) -> Self {
        Self {
            kind,
            name: None,
            server: None,
        }
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the server.
    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }
}

/// Error recorded on a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanError {
    /// Human-readable message.
    pub message: String,
    /// Structured detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl SpanError {
    /// Error with a message only.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} {}", self.message, data),
            None => f.write_str(&self.message),
        }
    }
}

/// A timed unit of work inside a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Id of the owning trace.
    pub trace_id: String,
    /// Span identifier.
    pub span_id: String,
    /// Parent span, if nested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Typed payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_data: Option<SpanData>,
    /// Error, if the span failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SpanError>,
}

impl Span {
    /// Create a span with no payload or error.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            parent_id: None,
            span_data: None,
            error: None,
        }
    }

    /// Attach a parent span.
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: SpanData) -> Self {
        self.span_data = Some(data);
        self
    }

    /// Attach an error.
    #[must_use]
    pub fn with_error(mut self, error: SpanError) -> Self {
        self.error = Some(error);
        self
    }
}
