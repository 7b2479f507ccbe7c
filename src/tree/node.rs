//! Parse tree node shape produced by the grammar engine.
//!
//! A node is a scalar token, an ordered sequence, or an ordered map from
//! grammar symbol names to child nodes. `Epsilon` marks a production that
//! matched nothing and is treated as absent by every query.

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Epsilon,
    Scalar(String),
    Seq(Vec<Node>),
    Map(Vec<(String, Node)>),
}

impl Node {
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Single-entry map, the shape of a matched non-terminal.
    pub fn named(name: impl Into<String>, value: Node) -> Self {
        Node::Map(vec![(name.into(), value)])
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Node::Epsilon)
    }

    /// True for `Epsilon` and for a singleton sequence holding only `Epsilon`.
    pub fn is_absent(&self) -> bool {
        match self {
            Node::Epsilon => true,
            Node::Seq(items) => items.len() == 1 && items[0].is_epsilon(),
            _ => false,
        }
    }

    /// Remove epsilons from sequences and map values, dropping entries that
    /// end up empty. Returns `None` when nothing is left.
    pub fn prune(self) -> Option<Node> {
        match self {
            Node::Epsilon => None,
            Node::Scalar(s) => Some(Node::Scalar(s)),
            Node::Seq(items) => {
                let kept: Vec<Node> = items.into_iter().filter_map(Node::prune).collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(Node::Seq(kept))
                }
            }
            Node::Map(entries) => {
                let kept: Vec<(String, Node)> = entries
                    .into_iter()
                    .filter_map(|(k, v)| v.prune().map(|v| (k, v)))
                    .collect();
                if kept.is_empty() {
                    None
                } else {
                    Some(Node::Map(kept))
                }
            }
        }
    }
}
