use crate::grammar::rules::{Grammar, Item};
use crate::tree::Node;
use std::collections::{HashMap, HashSet};

/// Result of running a grammar engine over some text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub tree: Node,
    /// Unconsumed input; empty when the whole text matched.
    pub remainder: String,
}

/// Boundary to whatever turns classification text into a labeled tree.
pub trait GrammarEngine {
    /// `None` when no derivation of the start symbol matches any prefix.
    fn parse(&self, text: &str) -> Option<ParseOutcome>;
}

/// Packrat parser with ordered choice.
///
/// Alternatives are tried in declaration order and the first one that matches
/// is committed; there is no backtracking into a rule once it has succeeded.
/// Each (rule, offset) pair is derived at most once, so parsing time is linear
/// in the input length times the grammar size.
#[derive(Debug, Clone)]
pub struct TopDownParser {
    grammar: Grammar,
}

type Derivation = (Node, usize);

#[derive(Default)]
struct Memo {
    done: HashMap<(usize, usize), Option<Derivation>>,
    active: HashSet<(usize, usize)>,
}

impl TopDownParser {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    fn derive(&self, rule_idx: usize, text: &str, pos: usize, memo: &mut Memo) -> Option<Derivation> {
        let key = (rule_idx, pos);
        if let Some(done) = memo.done.get(&key) {
            return done.clone();
        }
        // Re-entering the same rule at the same offset is left recursion: fail the branch.
        if !memo.active.insert(key) {
            return None;
        }

        let rule = self.grammar.rule(rule_idx);
        let mut found = None;

        'alternatives: for alt in &rule.alternatives {
            let mut children = Vec::with_capacity(alt.len());
            let mut at = pos;

            for item in alt {
                match item {
                    Item::Epsilon => children.push(Node::Epsilon),
                    Item::Literal(lit) => {
                        if !text[at..].starts_with(lit.as_str()) {
                            continue 'alternatives;
                        }
                        children.push(Node::scalar(lit.as_str()));
                        at += lit.len();
                    }
                    Item::Rule(target) => match self.derive(*target, text, at, memo) {
                        Some((node, end)) => {
                            children.push(node);
                            at = end;
                        }
                        None => continue 'alternatives,
                    },
                }
            }

            found = Some((Node::named(rule.name.as_str(), Node::Seq(children)), at));
            break;
        }

        memo.active.remove(&key);
        memo.done.insert(key, found.clone());
        found
    }
}

impl GrammarEngine for TopDownParser {
    fn parse(&self, text: &str) -> Option<ParseOutcome> {
        let mut memo = Memo::default();
        let (tree, end) = self.derive(self.grammar.start(), text, 0, &mut memo)?;

        Some(ParseOutcome {
            tree,
            remainder: text[end..].to_string(),
        })
    }
}
