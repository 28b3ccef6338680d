use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance_factor,
    }
}

// The right child becomes the new subtree root. `node` is updated before `child` since the
// child's height now depends on it.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.left = node.left.take().map(rotate_left);
    node.update();
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.right = node.right.take().map(rotate_right);
    node.update();
    rotate_left(node)
}

/// Recomputes the metadata of `node` and restores the avl invariant at it, returning the new
/// subtree root.
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();

    let factor = node.balance_factor;
    if factor > 1 {
        if balance_factor(&node.left) < 0 {
            trace!("left-right rotation at height {} (balance factor {})", node.height, factor);
            rotate_left_right(node)
        } else {
            trace!("right rotation at height {} (balance factor {})", node.height, factor);
            rotate_right(node)
        }
    } else if factor < -1 {
        if balance_factor(&node.right) > 0 {
            trace!("right-left rotation at height {} (balance factor {})", node.height, factor);
            rotate_right_left(node)
        } else {
            trace!("left rotation at height {} (balance factor {})", node.height, factor);
            rotate_left(node)
        }
    } else {
        node
    }
}

/// Inserts `value` into the subtree, returning the new subtree root and whether a node was
/// created. A value equal to an existing one leaves the subtree untouched.
pub fn insert<T>(tree: Tree<T>, value: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), true),
    };

    let inserted = match value.cmp(&node.value) {
        Ordering::Less => {
            let (child, inserted) = insert(node.left.take(), value);
            node.left = Some(child);
            inserted
        },
        Ordering::Greater => {
            let (child, inserted) = insert(node.right.take(), value);
            node.right = Some(child);
            inserted
        },
        Ordering::Equal => return (node, false),
    };

    if inserted {
        (balance(node), true)
    } else {
        (node, false)
    }
}

// Detaches the rightmost node of the subtree, returning the rebalanced remainder and the
// detached value.
fn remove_max<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.right.take() {
        Some(right) => {
            let (right, max) = remove_max(right);
            node.right = right;
            (Some(balance(node)), max)
        },
        None => {
            let Node { value, left, .. } = *node;
            (left, value)
        },
    }
}

fn unlink<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match (node.left.take(), node.right.take()) {
        (None, None) => (None, node.value),
        (None, Some(right)) => (Some(right), node.value),
        (Some(left), None) => (Some(left), node.value),
        (Some(left), Some(right)) => {
            let (left, predecessor) = remove_max(left);
            let removed = mem::replace(&mut node.value, predecessor);
            node.left = left;
            node.right = Some(right);
            (Some(balance(node)), removed)
        },
    }
}

/// Removes `value` from the subtree, returning the new subtree root and the removed value. If
/// the value is absent the subtree is returned exactly as it was given.
pub fn remove<T>(tree: Tree<T>, value: &T) -> (Tree<T>, Option<T>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match value.cmp(&node.value) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), value);
            node.left = child;
            removed
        },
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), value);
            node.right = child;
            removed
        },
        Ordering::Equal => {
            let (tree, removed) = unlink(node);
            return (tree, Some(removed));
        },
    };

    match removed {
        Some(removed) => (Some(balance(node)), Some(removed)),
        None => (Some(node), None),
    }
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn preorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        values.push(&node.value);
        preorder(&node.left, values);
        preorder(&node.right, values);
    }
}

pub fn inorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        inorder(&node.left, values);
        values.push(&node.value);
        inorder(&node.right, values);
    }
}

pub fn postorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        postorder(&node.left, values);
        postorder(&node.right, values);
        values.push(&node.value);
    }
}

pub fn levelorder<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    let mut queue: VecDeque<&'a Node<T>> = tree.as_deref().into_iter().collect();
    while let Some(node) = queue.pop_front() {
        values.push(&node.value);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
}

/// Descends through every internal node, left subtree first, and stops at leaves. Nothing is
/// ever pushed to `values`: leaves are skipped and internal nodes are only passed through.
#[allow(clippy::only_used_in_recursion)]
pub fn descending_leaves<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        if node.is_leaf() {
            return;
        }
        descending_leaves(&node.left, values);
        descending_leaves(&node.right, values);
    }
}
