use pretty_assertions::assert_eq;

use crate::tree::{Node, QueryError, Tree};

fn s(text: &str) -> Node {
    Node::scalar(text)
}

fn seq(items: Vec<Node>) -> Node {
    Node::Seq(items)
}

fn map(entries: Vec<(&str, Node)>) -> Node {
    Node::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn values<'a>(found: Vec<Tree<'a>>) -> Vec<&'a Node> {
    found.iter().filter_map(|t| t.node()).collect()
}

// ============================================================================
// find
// ============================================================================

#[test]
fn find_returns_every_occurrence_in_document_order() {
    let root = map(vec![
        ("X", seq(vec![map(vec![("a", s("1"))])])),
        ("b", map(vec![("X", s("2"))])),
        ("c", seq(vec![map(vec![("X", s("3"))])])),
        ("d", map(vec![("X", map(vec![("e", s("4"))]))])),
    ]);

    let found = values(Tree::new(&root).find("X"));
    assert_eq!(
        found,
        vec![
            &seq(vec![map(vec![("a", s("1"))])]),
            &s("2"),
            &s("3"),
            &map(vec![("e", s("4"))]),
        ]
    );
}

#[test]
fn find_does_not_expand_a_matched_value() {
    let root = map(vec![("X", map(vec![("X", s("1"))]))]);

    let found = values(Tree::new(&root).find("X"));
    assert_eq!(found, vec![&map(vec![("X", s("1"))])]);
}

#[test]
fn find_with_no_matches_is_empty() {
    let root = map(vec![
        ("a", s("1")),
        ("b", seq(vec![])),
        ("c", map(vec![])),
        ("d", seq(vec![map(vec![("e", map(vec![("f", s("1"))]))])])),
    ]);

    assert!(Tree::new(&root).find("X").is_empty());
}

#[test]
fn find_ignores_epsilon_values() {
    let root = map(vec![
        ("X", Node::Epsilon),
        ("a", seq(vec![map(vec![("X", Node::Epsilon)])])),
        ("b", seq(vec![map(vec![("X", seq(vec![Node::Epsilon]))])])),
    ]);

    assert!(Tree::new(&root).find("X").is_empty());
}

// ============================================================================
// find_only / find_optional
// ============================================================================

#[test]
fn find_only_returns_single_occurrence() {
    let direct = map(vec![("a", s("1")), ("X", s("3"))]);
    let in_seq = map(vec![("a", s("1")), ("c", seq(vec![map(vec![("X", s("3"))])]))]);

    assert_eq!(Tree::new(&direct).find_only("X").unwrap().node(), Some(&s("3")));
    assert_eq!(Tree::new(&in_seq).find_only("X").unwrap().node(), Some(&s("3")));
}

#[test]
fn find_only_reports_name_and_count() {
    let none = map(vec![("a", s("1"))]);
    let many = map(vec![("X", s("2")), ("c", seq(vec![map(vec![("X", s("3"))])]))]);

    assert_eq!(
        Tree::new(&none).find_only("X"),
        Err(QueryError::MatchCount {
            name: "X".to_string(),
            expected: "exactly one",
            found: 0
        })
    );
    assert_eq!(
        Tree::new(&many).find_only("X"),
        Err(QueryError::MatchCount {
            name: "X".to_string(),
            expected: "exactly one",
            found: 2
        })
    );
}

#[test]
fn find_optional_yields_empty_tree_without_matches() {
    let root = map(vec![("a", s("1")), ("c", seq(vec![map(vec![("d", s("3"))])]))]);

    let found = Tree::new(&root).find_optional("X").unwrap();
    assert!(found.is_empty());
    assert_eq!(found.collect_text(), "");
    assert!(found.find("anything").is_empty());
    assert!(found.find_only("anything").is_err());
}

#[test]
fn find_optional_rejects_multiple_matches() {
    let root = map(vec![("X", s("2")), ("c", seq(vec![map(vec![("X", s("3"))])]))]);

    assert!(Tree::new(&root).find_optional("X").is_err());
}

// ============================================================================
// collect_text
// ============================================================================

#[test]
fn collect_text_of_empty_shapes() {
    assert_eq!(Tree::new(&map(vec![])).collect_text(), "");
    assert_eq!(Tree::new(&seq(vec![])).collect_text(), "");
    assert_eq!(Tree::new(&s("")).collect_text(), "");
    assert_eq!(Tree::new(&Node::Epsilon).collect_text(), "");
}

#[test]
fn collect_text_concatenates_leaves_in_order() {
    let root = map(vec![
        ("a", s("1")),
        ("b", seq(vec![s("2"), map(vec![("c", s("3"))]), Node::Epsilon])),
        ("d", map(vec![("e", seq(vec![s("4"), s("5")]))])),
    ]);

    assert_eq!(Tree::new(&root).collect_text(), "12345");
}

// ============================================================================
// on_* callbacks
// ============================================================================

#[test]
fn on_value_calls_once_per_match() {
    let root = map(vec![
        ("X", s("1")),
        ("b", map(vec![("X", s("2"))])),
        ("f", map(vec![("X", Node::Epsilon)])),
    ]);

    let mut seen = Vec::new();
    Tree::new(&root).on_value("X", |t| seen.push(t.collect_text()));
    assert_eq!(seen, vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn on_only_value_propagates_count_errors() {
    let root = map(vec![("a", s("1"))]);

    let mut called = false;
    let result: Result<(), QueryError> = Tree::new(&root).on_only_value("X", |_| {
        called = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!called);
}

#[test]
fn on_optional_value_skips_missing_values() {
    let present = map(vec![("X", s("3"))]);
    let absent = map(vec![("a", s("1"))]);

    let mut seen = Vec::new();
    Tree::new(&present)
        .on_optional_value("X", |t| {
            seen.push(t.collect_text());
            Ok::<(), QueryError>(())
        })
        .unwrap();
    Tree::new(&absent)
        .on_optional_value("X", |t| {
            seen.push(t.collect_text());
            Ok::<(), QueryError>(())
        })
        .unwrap();
    assert_eq!(seen, vec!["3".to_string()]);
}

// ============================================================================
// positional access and pruning
// ============================================================================

#[test]
fn child_indexes_into_sequences() {
    let root = seq(vec![s("A"), s("-"), map(vec![("N", s("4"))])]);
    let tree = Tree::new(&root);

    assert_eq!(tree.children().unwrap().len(), 3);
    assert_eq!(tree.child(2).unwrap().find_only("N").unwrap().collect_text(), "4");
    assert_eq!(
        tree.child(3),
        Err(QueryError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert!(Tree::new(&s("A")).child(0).is_err());
}

#[test]
fn prune_drops_epsilons_and_emptied_entries() {
    let root = map(vec![
        ("A", seq(vec![s("G"), Node::Epsilon])),
        ("B", seq(vec![Node::Epsilon])),
        ("C", map(vec![("D", Node::Epsilon)])),
    ]);

    assert_eq!(root.prune(), Some(map(vec![("A", seq(vec![s("G")]))])));
    assert_eq!(seq(vec![Node::Epsilon]).prune(), None);
}
