//! RDF decoding for Triplegraph
//!
//! This module turns N-Triples bytes into [`RawTriple`]s and classifies their
//! objects into canonical strings:
//! - [`decode`]: lenient, line-oriented, all-or-nothing N-Triples decoder
//! - [`ObjectClassifier`]: resource / literal / blank node canonicalization
//! - [`vocab`]: the handful of IRIs the indexer cares about
//!
//! # Example
//!
//! ```rust
//! use triplegraph::rdf::{decode, classify};
//!
//! let input = b"<http://example.org/a> <http://example.org/name> \"Alice\"@en .\n";
//! let triples = decode(input).unwrap();
//! assert_eq!(triples.len(), 1);
//!
//! let object = classify(&triples[0].object).unwrap();
//! assert_eq!(object.to_string(), "\"Alice\"@en");
//! ```

mod classify;
mod decoder;
pub mod vocab;

pub use classify::{
    classify, CanonicalObject, ClassificationError, ClassificationResult, ObjectClassifier,
    ObjectKind,
};

pub use decoder::{
    decode, DecodeError, DecodeProblem, DecodeResult, RawTriple,
};

pub use vocab::{Namespace, BLANK_NODE_PREFIX, BLANK_NODE_TYPE, RDF_TYPE};
