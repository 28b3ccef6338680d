use crate::avl_tree::tree::{self, Tree};

/// A node of an avl tree.
///
/// The height and balance factor are cached on the node and recomputed bottom-up whenever a
/// descendant changes. A leaf has a height of 0 and an absent child counts as height -1.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,
    pub(crate) height: i32,
    pub(crate) balance_factor: i32,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
            height: 0,
            balance_factor: 0,
        }
    }

    /// Recomputes the cached height and balance factor from the children. The children's
    /// metadata must already be final.
    pub(crate) fn update(&mut self) {
        let left_height = tree::height(&self.left);
        let right_height = tree::height(&self.right);
        self.height = if right_height >= left_height {
            right_height + 1
        } else {
            left_height + 1
        };
        self.balance_factor = left_height - right_height;
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the cached difference between the height of the left subtree and the height of
    /// the right subtree.
    pub fn balance_factor(&self) -> i32 {
        self.balance_factor
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_leaf() {
        let node = Node::new(1);
        assert_eq!(node.height(), 0);
        assert_eq!(node.balance_factor(), 0);
        assert!(node.is_leaf());
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_update_left_child() {
        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        node.update();
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance_factor(), 1);
        assert!(!node.is_leaf());
    }

    #[test]
    fn test_update_both_children() {
        let mut right = Node::new(3);
        right.right = Some(Box::new(Node::new(4)));
        right.update();

        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        node.right = Some(Box::new(right));
        node.update();

        assert_eq!(node.height(), 2);
        assert_eq!(node.balance_factor(), -1);
        assert_eq!(node.right().map(|child| *child.value()), Some(3));
    }
}
