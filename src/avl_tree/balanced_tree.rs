use crate::avl_tree::node::Node;
use crate::avl_tree::tree::{self, Tree};
use crate::avl_tree::{Error, Result};
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Each node caches its height
/// (a leaf has height 0 and an absent subtree height -1) and its balance factor, which are
/// exposed through `root()` for structural inspection.
///
/// Operations that take a value accept anything convertible into an `Option`, so plain values
/// can be passed directly. Passing `None` is rejected with `Error::InvalidArgument`.
///
/// # Examples
/// ```
/// use balanced_tree::avl_tree::{BalancedTree, Error};
///
/// let mut tree: BalancedTree<u32> = BalancedTree::new();
/// tree.insert(0).unwrap();
/// tree.insert(3).unwrap();
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.height(), 1);
///
/// assert_eq!(tree.remove(&0), Ok(0));
/// assert_eq!(tree.remove(&1), Err(Error::NotFound));
/// ```
#[derive(Clone)]
pub struct BalancedTree<T> {
    root: Tree<T>,
    size: usize,
}

impl<T> BalancedTree<T> {
    /// Constructs a new, empty `BalancedTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = BalancedTree::new();
    /// ```
    pub fn new() -> Self {
        BalancedTree {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = BalancedTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree: -1 if it is empty, otherwise the cached height of the
    /// root.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.root)
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing tree of {} values", self.size);
        self.root = None;
        self.size = 0;
    }

    /// Returns the root node of the tree, or `None` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = (1..=3).collect();
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.height(), 1);
    /// assert_eq!(root.balance_factor(), 0);
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns the values of the tree in preorder: node, left subtree, right subtree.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.preorder(), vec![&2, &1, &3]);
    /// ```
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        tree::preorder(&self.root, &mut values);
        values
    }

    /// Returns the values of the tree in inorder, which is ascending order.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![&1, &2, &3]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        tree::inorder(&self.root, &mut values);
        values
    }

    /// Returns the values of the tree in postorder: left subtree, right subtree, node.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.postorder(), vec![&1, &3, &2]);
    /// ```
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        tree::postorder(&self.root, &mut values);
        values
    }

    /// Returns the values of the tree level by level, each level from left to right.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = vec![2, 1, 3, 4].into_iter().collect();
    /// assert_eq!(tree.levelorder(), vec![&2, &1, &3, &4]);
    /// ```
    pub fn levelorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.size);
        tree::levelorder(&self.root, &mut values);
        values
    }

    /// Descends through the internal nodes of the tree, skipping leaves. No value is ever
    /// collected along the way, so the result is always empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let tree: BalancedTree<u32> = (0..10).collect();
    /// assert!(tree.descending_leaves().is_empty());
    /// ```
    pub fn descending_leaves(&self) -> Vec<&T> {
        let mut values = Vec::new();
        tree::descending_leaves(&self.root, &mut values);
        values
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> BalancedTreeIter<T> {
        BalancedTreeIter {
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> BalancedTree<T>
where
    T: Ord,
{
    /// Constructs a tree by inserting `values` in the order given. Returns
    /// `Error::InvalidArgument` if `values` is `None` or if any of its elements is `None`, in
    /// which case nothing is inserted.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{BalancedTree, Error};
    ///
    /// let tree = BalancedTree::<u32>::from_values(Some(vec![1, 2, 3])).unwrap();
    /// assert_eq!(tree.root().map(|node| *node.value()), Some(2));
    ///
    /// let result = BalancedTree::<u32>::from_values(Some(vec![Some(1), None]));
    /// assert_eq!(result.err(), Some(Error::InvalidArgument("element")));
    /// ```
    pub fn from_values<I, V>(values: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Option<T>>,
    {
        let values = values.ok_or(Error::InvalidArgument("values"))?;
        let values = values
            .into_iter()
            .map(|value| value.into().ok_or(Error::InvalidArgument("element")))
            .collect::<Result<Vec<T>>>()?;

        debug!("bulk loading {} values", values.len());
        Ok(values.into_iter().collect())
    }

    pub(crate) fn insert_value(&mut self, value: T) -> bool {
        let (root, inserted) = tree::insert(self.root.take(), value);
        self.root = Some(root);
        if inserted {
            self.size += 1;
        } else {
            debug!("ignored duplicate insert");
        }
        inserted
    }

    /// Inserts a value into the tree. Returns `Ok(true)` if the value was added and `Ok(false)`
    /// if an equal value was already present, in which case the tree is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{BalancedTree, Error};
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// assert_eq!(tree.insert(1), Ok(true));
    /// assert_eq!(tree.insert(1), Ok(false));
    /// assert_eq!(tree.insert(None), Err(Error::InvalidArgument("value")));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert<V>(&mut self, value: V) -> Result<bool>
    where
        V: Into<Option<T>>,
    {
        let value = value.into().ok_or(Error::InvalidArgument("value"))?;
        Ok(self.insert_value(value))
    }

    /// Removes a value from the tree and returns it. If the value is not in the tree, returns
    /// `Error::NotFound` and leaves the tree unchanged.
    ///
    /// A value with two children is replaced by its predecessor, the maximum value of its left
    /// subtree.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{BalancedTree, Error};
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(Error::NotFound));
    /// ```
    pub fn remove<'a, V>(&mut self, value: V) -> Result<T>
    where
        V: Into<Option<&'a T>>,
        T: 'a,
    {
        let value = value.into().ok_or(Error::InvalidArgument("value"))?;
        if self.root.is_none() {
            debug!("remove from an empty tree");
            return Err(Error::NotFound);
        }

        let (root, removed) = tree::remove(self.root.take(), value);
        self.root = root;
        match removed {
            Some(removed) => {
                self.size -= 1;
                Ok(removed)
            },
            None => {
                debug!("remove found no match among {} values", self.size);
                Err(Error::NotFound)
            },
        }
    }

    /// Returns a reference to the stored value equal to `value`, or `Error::NotFound` if there
    /// is none.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::{BalancedTree, Error};
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.get(&1), Ok(&1));
    /// assert_eq!(tree.get(&2), Err(Error::NotFound));
    /// ```
    pub fn get<'a, V>(&self, value: V) -> Result<&T>
    where
        V: Into<Option<&'a T>>,
        T: 'a,
    {
        let value = value.into().ok_or(Error::InvalidArgument("value"))?;
        tree::get(&self.root, value).ok_or(Error::NotFound)
    }

    /// Checks if a value exists in the tree. Only a `None` argument is an error.
    ///
    /// # Examples
    /// ```
    /// use balanced_tree::avl_tree::BalancedTree;
    ///
    /// let mut tree: BalancedTree<u32> = BalancedTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.contains(&0), Ok(false));
    /// assert_eq!(tree.contains(&1), Ok(true));
    /// ```
    pub fn contains<'a, V>(&self, value: V) -> Result<bool>
    where
        V: Into<Option<&'a T>>,
        T: 'a,
    {
        match self.get(value) {
            Ok(_) => Ok(true),
            Err(Error::NotFound) => Ok(false),
            Err(error) => Err(error),
        }
    }
}

impl<T> Default for BalancedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BalancedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for BalancedTree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &BalancedTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for BalancedTree<T> where T: Eq {}

impl<T> FromIterator<T> for BalancedTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = BalancedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BalancedTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert_value(value);
        }
    }
}

impl<T> IntoIterator for BalancedTree<T> {
    type Item = T;
    type IntoIter = BalancedTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a BalancedTree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = BalancedTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `BalancedTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct BalancedTreeIntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for BalancedTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `BalancedTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct BalancedTreeIter<'a, T>
where
    T: 'a,
{
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for BalancedTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.as_deref() {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}
