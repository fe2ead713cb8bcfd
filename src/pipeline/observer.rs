//! Pipeline observers
//!
//! The pipeline never logs on its own; it reports to whatever observer the
//! caller installs. [`TracingObserver`] is the default.

use crate::graph::GraphIndex;
use crate::rdf::DecodeError;
use tracing::{debug, info, warn};

/// Receives progress events from [`Processor`](super::Processor)
pub trait PipelineObserver: Send + Sync {
    fn decoding_started(&self, _byte_len: usize) {}

    fn decoded(&self, _triple_count: usize) {}

    fn decode_failed(&self, _error: &DecodeError) {}

    fn indexed(&self, _graph: &GraphIndex) {}
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn decoding_started(&self, byte_len: usize) {
        debug!(byte_len, "Decoding");
    }

    fn decoded(&self, triple_count: usize) {
        info!(triple_count, "Decoded {} triples", triple_count);
    }

    fn decode_failed(&self, error: &DecodeError) {
        warn!(line = error.line, problem = %error.problem, "Error decoding: {}", error);
    }

    fn indexed(&self, graph: &GraphIndex) {
        info!(
            subject_count = graph.subject_count(),
            statement_count = graph.statement_count(),
            edge_subject_count = graph.edge_subject_count(),
            edge_count = graph.edge_count(),
            "Found {} subjects",
            graph.subject_count()
        );
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
