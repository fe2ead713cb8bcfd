//! Graph indexer
//!
//! Folds decoded triples into a [`GraphIndex`]. Every triple becomes a
//! statement; only resource objects on predicates other than `rdf:type`
//! become edges. Repeated edges are kept as repeats.

use super::types::{GraphIndex, Triple};
use crate::config::ProcessorConfig;
use crate::rdf::{ClassificationResult, ObjectClassifier, ObjectKind, RawTriple, RDF_TYPE};

pub struct GraphIndexer {
    classifier: ObjectClassifier,
}

impl GraphIndexer {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            classifier: ObjectClassifier::new(config),
        }
    }

    /// Build both indexes from `triples`, in order
    pub fn index(&self, triples: Vec<RawTriple>) -> ClassificationResult<GraphIndex> {
        let mut graph = GraphIndex::new();
        for triple in triples {
            self.insert(&mut graph, triple)?;
        }
        Ok(graph)
    }

    fn insert(&self, graph: &mut GraphIndex, triple: RawTriple) -> ClassificationResult<()> {
        let RawTriple {
            subject,
            predicate,
            object,
            ..
        } = triple;
        let object = self.classifier.classify(&object)?;
        let is_edge = object.kind() == ObjectKind::Resource && predicate != RDF_TYPE;
        // A resource renders as its bare IRI, so the statement object doubles
        // as the edge target.
        let rendered = object.to_string();

        graph
            .statements
            .entry(subject.clone())
            .or_default()
            .push(Triple::new(subject.clone(), predicate.clone(), rendered.clone()));

        if is_edge {
            graph
                .edges
                .entry(subject)
                .or_default()
                .entry(predicate)
                .or_default()
                .push(rendered);
        }

        Ok(())
    }
}

impl Default for GraphIndexer {
    fn default() -> Self {
        Self::new(&ProcessorConfig::default())
    }
}

/// Index with the default configuration
pub fn index(triples: Vec<RawTriple>) -> ClassificationResult<GraphIndex> {
    GraphIndexer::default().index(triples)
}
