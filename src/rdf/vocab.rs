//! RDF vocabulary constants and namespace compaction
//!
//! Only the namespaces the indexer and classifier need are defined here.

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: &'static str,
    /// IRI
    pub iri: &'static str,
}

impl Namespace {
    /// Create a new namespace
    pub const fn new(prefix: &'static str, iri: &'static str) -> Self {
        Self { prefix, iri }
    }

    /// Compact an IRI belonging to this namespace into `prefix:local`
    pub fn compact(&self, iri: &str) -> Option<String> {
        iri.strip_prefix(self.iri)
            .map(|local| format!("{}:{}", self.prefix, local))
    }
}

pub const XSD: Namespace = Namespace::new("xsd", "http://www.w3.org/2001/XMLSchema#");

/// `rdf:type`. Triples with this predicate never become edges.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Marker that prefixes blank node identifiers in canonical strings
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Type reported for blank-node subjects by the type filter
pub const BLANK_NODE_TYPE: &str = "blank_node";
