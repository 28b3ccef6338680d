use crate::avl_tree::node::Node;
use crate::avl_tree::tree::Tree;

/// Walks the subtree and asserts the ordering, height, and balance invariants of every node,
/// returning the number of nodes visited.
pub(crate) fn assert_invariants<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    match tree.as_deref() {
        Some(node) => check(node, None, None).1,
        None => 0,
    }
}

// Returns the recomputed (height, size) of the subtree rooted at `node`.
fn check<T>(node: &Node<T>, lower: Option<&T>, upper: Option<&T>) -> (i32, usize)
where
    T: Ord,
{
    // Every value in a subtree lies strictly between the bounds set by its ancestors.
    assert!(lower.map(|lower| lower < node.value()).unwrap_or(true));
    assert!(upper.map(|upper| node.value() < upper).unwrap_or(true));

    let (left_height, left_size) = node
        .left()
        .map(|left| check(left, lower, Some(node.value())))
        .unwrap_or((-1, 0));
    let (right_height, right_size) = node
        .right()
        .map(|right| check(right, Some(node.value()), upper))
        .unwrap_or((-1, 0));

    let height = left_height.max(right_height) + 1;
    assert_eq!(node.height(), height);
    assert_eq!(node.balance_factor(), left_height - right_height);
    assert!(node.balance_factor().abs() <= 1, "balance_factor={}", node.balance_factor());

    (height, left_size + right_size + 1)
}
