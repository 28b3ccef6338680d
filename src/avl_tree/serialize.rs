use crate::avl_tree::BalancedTree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

struct BalancedTreeVisitor<T> {
    marker: PhantomData<fn() -> BalancedTree<T>>,
}

impl<'de, T> Visitor<'de> for BalancedTreeVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = BalancedTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of values")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = BalancedTree::new();
        while let Some(value) = access.next_element()? {
            tree.insert_value(value);
        }
        Ok(tree)
    }
}

/// A tree serializes as the sequence of its values in ascending order.
impl<T> Serialize for BalancedTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Values are inserted in the order they appear in the sequence; duplicates are dropped.
impl<'de, T> Deserialize<'de> for BalancedTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BalancedTreeVisitor {
            marker: PhantomData,
        })
    }
}
