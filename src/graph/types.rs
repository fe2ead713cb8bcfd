//! Index types
//!
//! Both indexes are insertion-ordered: subject and predicate keys appear in the
//! order they were first seen, and every list keeps decode order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A statement with its object in canonical string form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// Subject → statements about it
pub type StatementIndex = IndexMap<String, Vec<Triple>>;

/// Subject → predicate → target IRIs
pub type EdgeIndex = IndexMap<String, IndexMap<String, Vec<String>>>;

/// The two indexes built from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphIndex {
    pub statements: StatementIndex,
    pub edges: EdgeIndex,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct subjects
    pub fn subject_count(&self) -> usize {
        self.statements.len()
    }

    /// Number of subjects with at least one outgoing edge
    pub fn edge_subject_count(&self) -> usize {
        self.edges.len()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.values().map(Vec::len).sum()
    }

    /// Total number of edges, repeats included
    pub fn edge_count(&self) -> usize {
        self.edges
            .values()
            .flat_map(|by_predicate| by_predicate.values())
            .map(Vec::len)
            .sum()
    }

    pub fn into_parts(self) -> (StatementIndex, EdgeIndex) {
        (self.statements, self.edges)
    }
}
