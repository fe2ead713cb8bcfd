//! Subject-keyed graph indexes
//!
//! - [`StatementIndex`]: every statement, grouped by subject
//! - [`EdgeIndex`]: resource-to-resource links, grouped by subject then predicate
//! - [`subjects_by_type`]: subjects bucketed by `rdf:type`

pub mod filter;
pub mod indexer;
pub mod types;

pub use filter::subjects_by_type;
pub use indexer::{index, GraphIndexer};
pub use types::{EdgeIndex, GraphIndex, StatementIndex, Triple};
