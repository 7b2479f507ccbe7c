//! Generic parse tree and the query layer used by the classification transform.

pub mod node;
pub mod query;

#[cfg(test)]
mod query_test;

pub use node::Node;
pub use query::{QueryError, Tree};
