//! JSON response envelope
//!
//! This is what a host process receives:
//!
//! ```json
//! {
//!   "statementsBySubject": { "<subject>": [{ "subject": "...", "predicate": "...", "object": "..." }] },
//!   "edgesBySubject": { "<subject>": { "<predicate>": ["<target>"] } },
//!   "statusCode": 200,
//!   "uri": "https://...",
//!   "error": ""
//! }
//! ```
//!
//! On failure both indexes are left out and `error` holds the message. When a
//! type filter was applied, `subjectsByType` holds one subject list per
//! requested type.

use crate::graph::{subjects_by_type, EdgeIndex, StatementIndex};
use crate::pipeline::{ProcessedGraph, ProcessingResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements_by_subject: Option<StatementIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_by_subject: Option<EdgeIndex>,
    /// Set by [`Response::with_type_filter`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects_by_type: Option<Vec<Vec<String>>>,
    /// HTTP status of the fetch, 0 when none was received
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub uri: String,
    /// Empty on success
    #[serde(default)]
    pub error: String,
}

impl Response {
    pub fn success(uri: impl Into<String>, status_code: u16, graph: ProcessedGraph) -> Self {
        Self {
            statements_by_subject: Some(graph.statements_by_subject),
            edges_by_subject: Some(graph.edges_by_subject),
            subjects_by_type: None,
            status_code,
            uri: uri.into(),
            error: String::new(),
        }
    }

    pub fn failure(uri: impl Into<String>, status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            uri: uri.into(),
            error: error.into(),
            ..Self::default()
        }
    }

    /// Wrap a pipeline outcome
    pub fn from_outcome(
        uri: impl Into<String>,
        status_code: u16,
        outcome: ProcessingResult<ProcessedGraph>,
    ) -> Self {
        match outcome {
            Ok(graph) => Self::success(uri, status_code, graph),
            Err(err) => Self::failure(uri, status_code, err.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    /// Bucket subjects by `rdf:type`, one list per `filter` entry.
    ///
    /// No-op on a failed response or an empty filter.
    pub fn with_type_filter<T: AsRef<str>>(mut self, filter: &[T]) -> Self {
        if filter.is_empty() {
            return self;
        }
        if let Some(statements) = &self.statements_by_subject {
            let buckets: Vec<Vec<String>> = subjects_by_type(statements, filter)
                .into_iter()
                .map(|bucket| bucket.into_iter().map(str::to_owned).collect())
                .collect();
            self.subjects_by_type = Some(buckets);
        }
        self
    }

    /// Prefix `error` with its status class: `Server error: ` for 5xx,
    /// `Client error: ` for 3xx and 4xx. Other codes are left alone.
    pub fn with_status_class_prefix(mut self) -> Self {
        if self.error.is_empty() {
            return self;
        }
        let class = match self.status_code {
            500..=u16::MAX => "Server error",
            300..=499 => "Client error",
            _ => return self,
        };
        self.error = format!("{}: {}", class, self.error);
        self
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
