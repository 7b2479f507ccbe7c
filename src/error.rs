//! Contract violations raised while turning a parse tree into a classification.
//!
//! These mean the transform's assumptions about the grammar's output shape do
//! not hold. Input the grammar rejects is not an error: it decodes to `None`.

use crate::tree::QueryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("tree query failed: {0}")]
    Query(#[from] QueryError),

    #[error("expected {expected} {what} but extracted {found}")]
    UnexpectedCount {
        what: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("unknown {table} suffix {token:?}")]
    UnknownSuffix { table: &'static str, token: String },

    #[error("unknown element {0:?}")]
    UnknownElement(String),

    #[error("unknown luminosity prefix {0:?}")]
    UnknownPrefix(String),

    #[error("malformed {name} node: {detail}")]
    MalformedNode { name: &'static str, detail: String },

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("parse tree contains no recognisable class")]
    MissingClass,
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
