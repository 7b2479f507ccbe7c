//! Search and extraction primitives over a parse tree.
//!
//! Nothing here knows about spectral classes: queries are by grammar symbol
//! name only. A `Tree` wrapping no node is the empty tree; it answers every
//! read with "no matches" but refuses `find_only`.

use crate::tree::node::Node;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("expected {expected} match(es) for {name} but found {found}")]
    MatchCount {
        name: String,
        expected: &'static str,
        found: usize,
    },

    #[error("find_only({name}) was called on the empty tree")]
    EmptyTree { name: String },

    #[error("child index {index} out of range (node has {len} children)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("positional access on a node that is not a sequence: {node}")]
    NotASequence { node: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree<'a> {
    root: Option<&'a Node>,
}

impl<'a> Tree<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root: Some(root) }
    }

    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The wrapped node, `None` for the empty tree.
    pub fn node(&self) -> Option<&'a Node> {
        self.root
    }

    /// Every value stored under a map key equal to `name`, at any depth, in
    /// document order. A matching value is returned whole and not searched
    /// further.
    pub fn find(&self, name: &str) -> Vec<Tree<'a>> {
        self.matches(name).into_iter().map(Tree::new).collect()
    }

    pub fn find_only(&self, name: &str) -> Result<Tree<'a>, QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyTree {
                name: name.to_string(),
            });
        }
        let matches = self.matches(name);
        match matches.as_slice() {
            [only] => Ok(Tree::new(only)),
            _ => Err(QueryError::MatchCount {
                name: name.to_string(),
                expected: "exactly one",
                found: matches.len(),
            }),
        }
    }

    /// Zero matches yields the empty tree; more than one is an error.
    pub fn find_optional(&self, name: &str) -> Result<Tree<'a>, QueryError> {
        let matches = self.matches(name);
        match matches.as_slice() {
            [] => Ok(Tree::empty()),
            [only] => Ok(Tree::new(only)),
            _ => Err(QueryError::MatchCount {
                name: name.to_string(),
                expected: "zero or one",
                found: matches.len(),
            }),
        }
    }

    /// Concatenate all scalar leaves in document order.
    pub fn collect_text(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            collect_text(root, &mut out);
        }
        out
    }

    pub fn on_value(&self, name: &str, mut f: impl FnMut(Tree<'a>)) -> &Self {
        for m in self.find(name) {
            f(m);
        }
        self
    }

    pub fn on_only_value<E>(
        &self,
        name: &str,
        f: impl FnOnce(Tree<'a>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<QueryError>,
    {
        f(self.find_only(name)?)
    }

    /// Calls `f` only when exactly one match exists.
    pub fn on_optional_value<E>(
        &self,
        name: &str,
        f: impl FnOnce(Tree<'a>) -> Result<(), E>,
    ) -> Result<(), E>
    where
        E: From<QueryError>,
    {
        let value = self.find_optional(name)?;
        if value.is_empty() {
            return Ok(());
        }
        f(value)
    }

    pub fn child(&self, index: usize) -> Result<Tree<'a>, QueryError> {
        let items = self.sequence()?;
        items
            .get(index)
            .map(Tree::new)
            .ok_or(QueryError::IndexOutOfRange {
                index,
                len: items.len(),
            })
    }

    pub fn children(&self) -> Result<Vec<Tree<'a>>, QueryError> {
        Ok(self.sequence()?.iter().map(Tree::new).collect())
    }

    fn sequence(&self) -> Result<&'a [Node], QueryError> {
        match self.root {
            Some(Node::Seq(items)) => Ok(items),
            Some(other) => Err(QueryError::NotASequence {
                node: format!("{:?}", other),
            }),
            None => Ok(&[]),
        }
    }

    fn matches(&self, name: &str) -> Vec<&'a Node> {
        let mut out = Vec::new();
        if let Some(root) = self.root {
            search(root, name, &mut out);
        }
        out
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(node) => write!(f, "{:?}", node),
            None => write!(f, "EMPTY"),
        }
    }
}

fn search<'a>(node: &'a Node, name: &str, out: &mut Vec<&'a Node>) {
    match node {
        Node::Seq(items) => {
            for item in items {
                search(item, name, out);
            }
        }
        Node::Map(entries) => {
            for (key, value) in entries {
                if key == name {
                    if !value.is_absent() {
                        out.push(value);
                    }
                } else {
                    search(value, name, out);
                }
            }
        }
        Node::Scalar(_) | Node::Epsilon => {}
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Epsilon => {}
        Node::Scalar(s) => out.push_str(s),
        Node::Seq(items) => {
            for item in items {
                collect_text(item, out);
            }
        }
        Node::Map(entries) => {
            for (_, value) in entries {
                collect_text(value, out);
            }
        }
    }
}
