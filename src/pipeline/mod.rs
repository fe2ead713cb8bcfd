//! Processing pipeline
//!
//! Decoder → indexer. A decode failure is returned as-is: its message is the
//! caller-visible error and is never rewrapped.

mod observer;

pub use observer::{NoopObserver, PipelineObserver, TracingObserver};

use crate::config::ProcessorConfig;
use crate::graph::{EdgeIndex, GraphIndexer, StatementIndex};
use crate::rdf::{self, ClassificationError, DecodeError};
use std::sync::Arc;
use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    /// Input is not well-formed N-Triples
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Decoder produced a term the classifier cannot handle
    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Output of one successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedGraph {
    pub statements_by_subject: StatementIndex,
    pub edges_by_subject: EdgeIndex,
}

/// Stateless decoder/indexer front end. Safe to share between requests: each
/// call builds its own indexes.
#[derive(Clone)]
pub struct Processor {
    config: ProcessorConfig,
    observer: Arc<dyn PipelineObserver>,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Decode `body` and build both indexes
    pub fn process(&self, body: &[u8]) -> ProcessingResult<ProcessedGraph> {
        self.observer.decoding_started(body.len());

        let triples = rdf::decode(body).map_err(|err| {
            self.observer.decode_failed(&err);
            err
        })?;
        self.observer.decoded(triples.len());

        let graph = GraphIndexer::new(&self.config).index(triples)?;
        self.observer.indexed(&graph);

        let (statements_by_subject, edges_by_subject) = graph.into_parts();
        Ok(ProcessedGraph {
            statements_by_subject,
            edges_by_subject,
        })
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

impl std::fmt::Debug for Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Process with the default configuration
pub fn process(body: &[u8]) -> ProcessingResult<ProcessedGraph> {
    Processor::default().process(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphIndex;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PipelineObserver for RecordingObserver {
        fn decoding_started(&self, byte_len: usize) {
            self.events.lock().unwrap().push(format!("start:{byte_len}"));
        }

        fn decoded(&self, triple_count: usize) {
            self.events.lock().unwrap().push(format!("decoded:{triple_count}"));
        }

        fn decode_failed(&self, error: &DecodeError) {
            self.events.lock().unwrap().push(format!("failed:{}", error.line));
        }

        fn indexed(&self, graph: &GraphIndex) {
            self.events.lock().unwrap().push(format!(
                "indexed:{}:{}:{}",
                graph.subject_count(),
                graph.statement_count(),
                graph.edge_count()
            ));
        }
    }

    #[test]
    fn test_empty_body() {
        let result = process(b"").unwrap();
        assert_eq!(result, ProcessedGraph::default());
    }

    #[test]
    fn test_observer_sees_success() {
        let observer = Arc::new(RecordingObserver::default());
        let processor = Processor::default().with_observer(observer.clone());
        let body = b"<http://a> <http://p> <http://b> .\n<http://a> <http://q> \"x\" .\n";

        let result = processor.process(body).unwrap();
        assert_eq!(result.edges_by_subject["http://a"]["http://p"], vec!["http://b"]);
        assert_eq!(
            observer.events(),
            vec![format!("start:{}", body.len()), "decoded:2".into(), "indexed:1:2:1".into()]
        );
    }

    #[test]
    fn test_decode_error_is_passed_through_verbatim() {
        let observer = Arc::new(RecordingObserver::default());
        let processor = Processor::default().with_observer(observer.clone());

        let err = processor.process(b"\nnot a triple\n").unwrap_err();
        assert!(matches!(err, ProcessingError::Decode(_)));
        assert_eq!(err.to_string(), "lenient parsing: line 2: invalid subject in not a triple");
        assert_eq!(observer.events(), vec!["start:14".to_string(), "failed:2".into()]);
    }

    #[test]
    fn test_processor_config_is_applied() {
        let processor = Processor::new(ProcessorConfig {
            compact_xsd_datatypes: false,
        })
        .with_observer(Arc::new(NoopObserver));

        let result = processor.process(b"<http://a> <http://p> \"x\" .").unwrap();
        assert_eq!(
            result.statements_by_subject["http://a"][0].object,
            "\"x\"^^<http://www.w3.org/2001/XMLSchema#string>"
        );
    }
}
