use balanced_tree::avl_tree::{BalancedTree, Error, Node};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

// Returns the height of the subtree after checking ordering, cached heights, and balance factors.
fn check_node(node: &Node<u32>, lower: Option<u32>, upper: Option<u32>) -> i32 {
    let value = *node.value();
    assert!(lower.map_or(true, |lower| lower < value));
    assert!(upper.map_or(true, |upper| value < upper));

    let left_height = node.left().map_or(-1, |left| check_node(left, lower, Some(value)));
    let right_height = node.right().map_or(-1, |right| check_node(right, Some(value), upper));

    assert_eq!(node.height(), left_height.max(right_height) + 1);
    assert_eq!(node.balance_factor(), left_height - right_height);
    assert!(node.balance_factor().abs() <= 1);
    node.height()
}

fn check_tree(tree: &BalancedTree<u32>) {
    let height = tree.root().map_or(-1, |root| check_node(root, None, None));
    assert_eq!(tree.height(), height);
    assert_eq!(tree.inorder().len(), tree.len());
}

#[test]
fn int_test_avl_tree() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut tree: BalancedTree<u32> = BalancedTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0..NUM_OF_OPERATIONS as u32 / 2);
        assert_eq!(tree.insert(value), Ok(expected.insert(value)));
    }

    check_tree(&tree);
    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(0..NUM_OF_OPERATIONS as u32 / 2);
        assert_eq!(tree.contains(&value), Ok(expected.contains(&value)));

        if expected.remove(&value) {
            assert_eq!(tree.remove(&value), Ok(value));
        } else {
            assert_eq!(tree.remove(&value), Err(Error::NotFound));
            assert_eq!(tree.get(&value), Err(Error::NotFound));
        }
    }

    check_tree(&tree);
    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.into_iter().collect::<Vec<u32>>(),
        expected.into_iter().collect::<Vec<u32>>(),
    );
}

#[test]
fn int_test_remove_until_empty() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut values: Vec<u32> = (0..1000).collect();
    let mut tree: BalancedTree<u32> = values.iter().cloned().collect();

    while !values.is_empty() {
        let index = rng.gen_range(0..values.len());
        let value = values.swap_remove(index);
        assert_eq!(tree.remove(&value), Ok(value));
        assert_eq!(tree.len(), values.len());
        check_tree(&tree);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
    assert_eq!(tree.remove(&0), Err(Error::NotFound));
}

#[test]
fn int_test_sequential_insert_is_perfect() {
    let mut tree: BalancedTree<u32> = BalancedTree::new();
    for value in 0..(1 << 16) - 1 {
        tree.insert(value).unwrap();
    }

    // Sequential insertion of 2^k - 1 values produces a perfectly balanced tree.
    assert_eq!(tree.height(), 15);
    assert_eq!(tree.root().map(|node| *node.value()), Some((1 << 15) - 1));
    check_tree(&tree);
}

#[test]
fn int_test_bulk_load_preserves_insertion_order() {
    let ascending = BalancedTree::<u32>::from_values(Some(vec![1, 2, 3])).unwrap();
    let middle_first = BalancedTree::<u32>::from_values(Some(vec![2, 1, 3])).unwrap();

    assert_eq!(ascending.preorder(), vec![&2, &1, &3]);
    assert_eq!(middle_first.preorder(), vec![&2, &1, &3]);

    let skewed = BalancedTree::<u32>::from_values(Some(vec![3, 1, 2])).unwrap();
    assert_eq!(skewed.levelorder(), vec![&2, &1, &3]);

    let mut tree = BalancedTree::<u32>::from_values(Some(vec![5, 4, 3, 2, 1])).unwrap();
    assert_eq!(tree.levelorder(), vec![&4, &2, &5, &1, &3]);
    check_tree(&tree);

    assert_eq!(tree.insert(None), Err(Error::InvalidArgument("value")));
    assert_eq!(tree.len(), 5);
}
