//! Triplegraph
//!
//! Fetches N-Triples documents and turns them into two subject-keyed indexes
//! that a UI or analytics layer can walk without re-parsing triples.
//!
//! # Architecture
//!
//! - `rdf`: lenient N-Triples decoder (pest grammar) and object classifier
//! - `graph`: statement and edge indexes, insertion-ordered via `indexmap`,
//!   plus the `rdf:type` filter
//! - `pipeline`: decoder → indexer, with an injectable observer
//! - `fetch`: reqwest-based HTTP GET with headers, bearer auth and retries
//! - `response`: the JSON envelope handed back to the host
//! - `service`: fetch → process → response
//!
//! # Indexing rules
//!
//! - Every statement is recorded under its subject, in decode order.
//! - An edge is recorded only for a resource object on a predicate other
//!   than `rdf:type`. Repeated edges stay repeated.
//! - Literals render as `"value"@lang` or `"value"^^<datatype>`, blank nodes
//!   as `_:id`, resources as the bare IRI.
//!
//! ## Example Usage
//!
//! ```rust
//! use triplegraph::pipeline::process;
//!
//! let body = b"\
//! <https://id.parliament.uk/43RHonMf> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <https://id.parliament.uk/schema/Person> .
//! <https://id.parliament.uk/43RHonMf> <https://id.parliament.uk/schema/personGivenName> \"Diane\" .
//! <https://id.parliament.uk/43RHonMf> <https://id.parliament.uk/schema/Test> <https://id.parliament.uk/12345678> .
//! ";
//!
//! let graph = process(body).unwrap();
//! let statements = &graph.statements_by_subject["https://id.parliament.uk/43RHonMf"];
//! assert_eq!(statements.len(), 3);
//! assert_eq!(statements[1].object, "\"Diane\"^^<xsd:string>");
//!
//! let edges = &graph.edges_by_subject["https://id.parliament.uk/43RHonMf"];
//! assert_eq!(edges.len(), 1);
//! assert_eq!(edges["https://id.parliament.uk/schema/Test"], vec!["https://id.parliament.uk/12345678"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod fetch;
pub mod graph;
pub mod pipeline;
pub mod rdf;
pub mod response;
pub mod service;

// Re-export main types for convenience
pub use config::{
    Config, ConfigError, ConfigResult, FetchConfig, ProcessorConfig, ResponseConfig,
};

pub use fetch::{FetchError, FetchRequest, FetchResponse, FetchResult, Fetcher};

pub use graph::{subjects_by_type, EdgeIndex, GraphIndex, GraphIndexer, StatementIndex, Triple};

pub use pipeline::{
    NoopObserver, PipelineObserver, ProcessedGraph, Processor, ProcessingError, ProcessingResult,
    TracingObserver,
};

pub use rdf::{
    CanonicalObject, ClassificationError, DecodeError, DecodeProblem, ObjectClassifier,
    ObjectKind, RawTriple,
};

pub use response::Response;

pub use service::GraphService;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
