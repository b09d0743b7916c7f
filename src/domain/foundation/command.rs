//! Command infrastructure for application handlers.
//!
//! Instead of each handler accepting `identity, correlation_id, trace_id, ...`
//! separately, they accept a single `CommandMetadata` struct. This keeps
//! signatures stable when new metadata fields are added and guarantees that
//! the acting identity is always an explicit argument, never ambient state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identity;

/// Metadata context for command handlers.
///
/// Carries the acting identity plus tracing/correlation context through the
/// command processing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The identity executing this command (required for authorization).
    pub identity: Identity,

    /// Links related operations across a single user request.
    /// Generated at the API boundary if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID, propagated from incoming requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for the given identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    /// Sets the correlation ID.
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Sets the trace ID.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets the command source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if absent.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the trace ID if present.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Returns the command source if present.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
