//! Object classification
//!
//! Maps a decoded object term onto exactly one of three kinds (resource,
//! literal, blank node) and renders the canonical string stored in
//! [`Triple::object`](crate::graph::Triple).

use super::vocab::{BLANK_NODE_PREFIX, XSD};
use crate::config::ProcessorConfig;
use oxrdf::Term;
use std::fmt;
use thiserror::Error;

/// Classification errors
///
/// A conformant decoder never produces these; they signal a term shape the
/// classifier does not know how to canonicalize.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// Term is neither a resource, a literal nor a blank node
    #[error("unsupported object term: {0}")]
    UnsupportedTerm(String),
}

pub type ClassificationResult<T> = Result<T, ClassificationError>;

/// The three object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Resource,
    Literal,
    BlankNode,
}

/// A classified triple object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalObject {
    /// IRI, stored bare
    Resource(String),
    /// Blank node local identifier, without the `_:` marker
    BlankNode(String),
    /// Literal value; `datatype` is already rendered (possibly compacted)
    Literal {
        value: String,
        language: Option<String>,
        datatype: String,
    },
}

impl CanonicalObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            CanonicalObject::Resource(_) => ObjectKind::Resource,
            CanonicalObject::Literal { .. } => ObjectKind::Literal,
            CanonicalObject::BlankNode(_) => ObjectKind::BlankNode,
        }
    }
}

impl fmt::Display for CanonicalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalObject::Resource(iri) => f.write_str(iri),
            CanonicalObject::BlankNode(id) => write!(f, "{}{}", BLANK_NODE_PREFIX, id),
            CanonicalObject::Literal { value, language: Some(lang), .. } => {
                write!(f, "\"{}\"@{}", value, lang)
            }
            CanonicalObject::Literal { value, datatype, .. } => {
                write!(f, "\"{}\"^^<{}>", value, datatype)
            }
        }
    }
}

/// Object classifier
#[derive(Debug, Clone, Copy)]
pub struct ObjectClassifier {
    compact_xsd_datatypes: bool,
}

impl ObjectClassifier {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            compact_xsd_datatypes: config.compact_xsd_datatypes,
        }
    }

    /// Classify an object term.
    ///
    /// Blank nodes are checked first, then literals; anything else that is a
    /// named node is a resource. An empty language tag counts as absent, in
    /// which case the literal carries its datatype.
    pub fn classify(&self, term: &Term) -> ClassificationResult<CanonicalObject> {
        match term {
            Term::BlankNode(node) => Ok(CanonicalObject::BlankNode(node.as_str().to_owned())),
            Term::Literal(literal) => Ok(CanonicalObject::Literal {
                value: literal.value().to_owned(),
                language: literal
                    .language()
                    .filter(|lang| !lang.is_empty())
                    .map(str::to_owned),
                datatype: self.render_datatype(literal.datatype().as_str()),
            }),
            Term::NamedNode(node) => Ok(CanonicalObject::Resource(node.as_str().to_owned())),
            #[allow(unreachable_patterns)]
            other => Err(ClassificationError::UnsupportedTerm(other.to_string())),
        }
    }

    fn render_datatype(&self, datatype: &str) -> String {
        if self.compact_xsd_datatypes {
            if let Some(compact) = XSD.compact(datatype) {
                return compact;
            }
        }
        datatype.to_owned()
    }
}

impl Default for ObjectClassifier {
    fn default() -> Self {
        Self::new(&ProcessorConfig::default())
    }
}

/// Classify with the default configuration
pub fn classify(term: &Term) -> ClassificationResult<CanonicalObject> {
    ObjectClassifier::default().classify(term)
}
