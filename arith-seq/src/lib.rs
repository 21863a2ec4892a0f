//! A persistent singly-linked sequence with structural sharing.
//!
//! [`Seq`] is an immutable ordered sequence: every operation returns a new
//! sequence and leaves the source untouched. [`Seq::prepend`] is O(1) and
//! shares the entire existing sequence as the tail of the result, so building
//! and branching sequences is cheap. Bulk operations ([`Seq::append`],
//! [`Seq::reverse`], [`Seq::map`], ...) walk the sequence iteratively rather
//! than recursing, so their cost in call-stack depth is constant regardless of
//! sequence length.

use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

/// A node in the sequence: either the end marker, or an element plus the rest
/// of the sequence.
enum Node<T> {
    Empty,
    Cons {
        head: T,
        tail: Rc<Node<T>>,
    },
}

/// An immutable, structurally-shared ordered sequence.
///
/// Cloning a [`Seq`] is O(1); it copies a reference-counted handle, not the
/// elements.
pub struct Seq<T> {
    node: Rc<Node<T>>,
}

impl<T> Seq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            node: Rc::new(Node::Empty),
        }
    }

    /// Returns true if the sequence contains no elements.
    pub fn is_empty(&self) -> bool {
        matches!(&*self.node, Node::Empty)
    }

    /// Returns the first element, or [`None`] if the sequence is empty.
    pub fn head(&self) -> Option<&T> {
        match &*self.node {
            Node::Empty => None,
            Node::Cons { head, .. } => Some(head),
        }
    }

    /// Returns the sequence without its first element. The tail of an empty
    /// sequence is the empty sequence.
    ///
    /// The returned sequence shares its nodes with `self`.
    pub fn tail(&self) -> Seq<T> {
        match &*self.node {
            Node::Empty => Seq::new(),
            Node::Cons { tail, .. } => Seq {
                node: Rc::clone(tail),
            },
        }
    }

    /// Returns a new sequence with `head` in front of all elements of `self`.
    ///
    /// O(1). The new sequence's tail is `self` by identity (see
    /// [`Seq::ptr_eq`]); `self` is never copied or modified.
    pub fn prepend(&self, head: T) -> Seq<T> {
        Seq {
            node: Rc::new(Node::Cons {
                head,
                tail: Rc::clone(&self.node),
            }),
        }
    }

    /// Returns the number of elements in the sequence. Linear.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns the last element, or [`None`] if the sequence is empty. Linear.
    pub fn last(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns an iterator over references to the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: &self.node }
    }

    /// Returns true if `this` and `other` are the same sequence in memory, not
    /// merely equal element-wise.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.node, &other.node)
    }
}

impl<T: Clone> Seq<T> {
    /// Returns the sequence with its elements in reverse order.
    pub fn reverse(&self) -> Seq<T> {
        let mut out = Seq::new();
        for item in self.iter() {
            out = out.prepend(item.clone());
        }
        out
    }

    /// Returns a new sequence with `item` added after the last element.
    ///
    /// O(n): the sequence is reversed, the element is inserted at the front,
    /// and the result is reversed back, keeping stack usage constant.
    pub fn append(&self, item: T) -> Seq<T> {
        self.reverse().prepend(item).reverse()
    }

    /// Returns a new sequence holding all elements of `self` followed by all
    /// elements of `other`. The result shares `other`'s nodes as its tail.
    pub fn concat(&self, other: &Seq<T>) -> Seq<T> {
        let mut out = other.clone();
        for item in self.reverse().iter() {
            out = out.prepend(item.clone());
        }
        out
    }

    /// Returns a new sequence of the elements for which `pred` returns true.
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Seq<T> {
        self.iter().filter(|item| pred(item)).cloned().collect()
    }

    /// Returns the set of all orderings of the sequence's elements, n! for n
    /// elements. Duplicate elements produce duplicate orderings; nothing is
    /// deduplicated at this layer.
    pub fn permutations(&self) -> Seq<Seq<T>> {
        if self.is_empty() {
            return Seq::new().prepend(Seq::new());
        }
        let mut result = Seq::new();
        for (index, picked) in self.iter().enumerate() {
            let rest = self.remove_at(index);
            for perm in rest.permutations().iter() {
                result = result.prepend(perm.prepend(picked.clone()));
            }
        }
        result
    }

    /// Returns the sequence without the element at `index`.
    fn remove_at(&self, index: usize) -> Seq<T> {
        self.iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

impl<T> Seq<T> {
    /// Returns a new sequence obtained by applying `f` to every element.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Seq<U> {
        self.iter().map(f).collect()
    }

    /// Applies `f` to every element and concatenates the resulting sequences
    /// in order.
    pub fn flat_map<U: Clone>(&self, f: impl Fn(&T) -> Seq<U>) -> Seq<U> {
        let mut items = Vec::new();
        for item in self.iter() {
            for mapped in f(item).iter() {
                items.push(mapped.clone());
            }
        }
        items.into_iter().collect()
    }
}

impl<T: PartialEq> Seq<T> {
    /// Scans for the first element equal to `value` and returns the
    /// sub-sequence starting there, sharing nodes with `self`. Returns the
    /// empty sequence if no element matches.
    pub fn find(&self, value: &T) -> Seq<T> {
        let mut node = &self.node;
        loop {
            match &**node {
                Node::Empty => return Seq::new(),
                Node::Cons { head, tail } => {
                    if head == value {
                        return Seq {
                            node: Rc::clone(node),
                        };
                    }
                    node = tail;
                }
            }
        }
    }
}

impl<T> Clone for Seq<T> {
    fn clone(&self) -> Self {
        Seq {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq::new()
    }
}

impl<T: PartialEq> PartialEq for Seq<T> {
    /// Order-sensitive: sequences are equal only if they have the same length
    /// and pairwise-equal elements in the same positions.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Seq<T> {}

impl<T: Hash> Hash for Seq<T> {
    /// Compounds a running hash across positions, so reordered sequences hash
    /// differently in general.
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
        state.write_usize(self.size());
    }
}

impl<T: Debug> Debug for Seq<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for Seq<T> {
    fn drop(&mut self) {
        // The derived drop would recurse once per uniquely-owned node, which
        // overflows the stack for very long sequences. Unlink the nodes
        // iteratively instead; shared suffixes are left alone.
        if matches!(&*self.node, Node::Empty) || Rc::strong_count(&self.node) > 1 {
            return;
        }
        let mut node = mem::replace(&mut self.node, Rc::new(Node::Empty));
        loop {
            match Rc::try_unwrap(node) {
                Ok(Node::Cons { head, tail }) => {
                    drop(head);
                    node = tail;
                }
                _ => break,
            }
        }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut seq = Seq::new();
        for item in items.into_iter().rev() {
            seq = seq.prepend(item);
        }
        seq
    }
}

/// Iterator over references to a sequence's elements.
pub struct Iter<'a, T> {
    node: &'a Node<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.node {
            Node::Empty => None,
            Node::Cons { head, tail } => {
                self.node = tail;
                Some(head)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn seq_of(items: &[i32]) -> Seq<i32> {
        items.iter().copied().collect()
    }

    fn hash_of(seq: &Seq<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        seq.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn prepend_shares_tail_by_identity() {
        let a = seq_of(&[2, 3]);
        let b = a.prepend(1);

        assert!(Seq::ptr_eq(&b.tail(), &a));
        assert_eq!(a, seq_of(&[2, 3]));
        assert_eq!(b, seq_of(&[1, 2, 3]));
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let forward = seq_of(&[1, 2, 3]);
        let backward = seq_of(&[3, 2, 1]);

        assert_ne!(forward, backward);
        assert_eq!(forward, backward.reverse());
        assert_ne!(hash_of(&forward), hash_of(&backward));
    }

    #[test]
    fn append_keeps_order() {
        let seq = seq_of(&[1, 2]).append(3);
        assert_eq!(seq, seq_of(&[1, 2, 3]));
    }

    #[test]
    fn concat_shares_right_operand() {
        let left = seq_of(&[1, 2]);
        let right = seq_of(&[3, 4]);
        let joined = left.concat(&right);

        assert_eq!(joined, seq_of(&[1, 2, 3, 4]));
        assert!(Seq::ptr_eq(&joined.tail().tail(), &right));
    }

    #[test]
    fn find_returns_shared_suffix() {
        let seq = seq_of(&[1, 2, 3]);
        let suffix = seq.find(&2);

        assert_eq!(suffix, seq_of(&[2, 3]));
        assert!(Seq::ptr_eq(&suffix, &seq.tail()));
        assert!(seq.find(&9).is_empty());
    }

    #[test]
    fn map_filter_flat_map() {
        let seq = seq_of(&[1, 2, 3, 4]);

        assert_eq!(seq.map(|n| n * 10), seq_of(&[10, 20, 30, 40]));
        assert_eq!(seq.filter(|n| n % 2 == 0), seq_of(&[2, 4]));
        assert_eq!(
            seq.flat_map(|n| Seq::new().prepend(-n).prepend(*n)),
            seq_of(&[1, -1, 2, -2, 3, -3, 4, -4]),
        );
    }

    #[test]
    fn size_and_last() {
        let seq = seq_of(&[7, 8, 9]);
        assert_eq!(seq.size(), 3);
        assert_eq!(seq.last(), Some(&9));
        assert_eq!(Seq::<i32>::new().last(), None);
    }

    #[test]
    fn permutations_of_three_distinct_elements() {
        let perms = seq_of(&[1, 2, 3]).permutations();

        assert_eq!(perms.size(), 6);
        for expected in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            assert!(perms.iter().any(|perm| *perm == seq_of(&expected)));
        }
    }

    #[test]
    fn permutations_cardinality_is_factorial() {
        assert_eq!(Seq::<i32>::new().permutations().size(), 1);
        assert_eq!(seq_of(&[1]).permutations().size(), 1);
        assert_eq!(seq_of(&[1, 2, 3, 4]).permutations().size(), 24);
    }

    #[test]
    fn duplicate_elements_are_not_deduplicated() {
        let perms = seq_of(&[1, 1]).permutations();
        assert_eq!(perms.size(), 2);
    }

    #[test]
    fn long_sequence_drops_without_recursion() {
        let mut seq = Seq::new();
        for n in 0..200_000 {
            seq = seq.prepend(n);
        }
        assert_eq!(seq.size(), 200_000);
        drop(seq);
    }
}
