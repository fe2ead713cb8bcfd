//! Type filter over a [`StatementIndex`]
//!
//! Groups subjects by their `rdf:type` objects, one bucket per requested type,
//! so a caller asking for `[Person, Party]` gets the people first and the
//! parties second regardless of document order.

use super::types::{StatementIndex, Triple};
use crate::rdf::vocab::{BLANK_NODE_PREFIX, BLANK_NODE_TYPE};
use crate::rdf::RDF_TYPE;

/// Types of one subject's statements.
///
/// A blank-node subject is typed [`BLANK_NODE_TYPE`] only; its `rdf:type`
/// statements are ignored.
pub fn subject_types<'a>(subject: &'a str, statements: &'a [Triple]) -> Vec<&'a str> {
    if subject.starts_with(BLANK_NODE_PREFIX) {
        return vec![BLANK_NODE_TYPE];
    }
    statements
        .iter()
        .filter(|triple| triple.predicate == RDF_TYPE)
        .map(|triple| triple.object.as_str())
        .collect()
}

/// Subjects grouped by type, one list per `filter` entry in filter order.
///
/// Within a list subjects keep document order. A subject with several matching
/// types lands in each of their lists, at most once per list.
pub fn subjects_by_type<'a, T: AsRef<str>>(
    statements: &'a StatementIndex,
    filter: &[T],
) -> Vec<Vec<&'a str>> {
    let mut buckets: Vec<Vec<&'a str>> = vec![Vec::new(); filter.len()];
    if filter.is_empty() {
        return buckets;
    }

    for (subject, triples) in statements {
        let types = subject_types(subject, triples);
        for (bucket, wanted) in buckets.iter_mut().zip(filter) {
            if types.contains(&wanted.as_ref()) {
                bucket.push(subject.as_str());
            }
        }
    }

    buckets
}
