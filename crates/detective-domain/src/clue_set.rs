//! Clue set - the player's notebook of collected evidence
//!
//! An unbalanced binary search tree keyed by clue text. Enumeration is always
//! sorted; the tree's shape (and therefore its height) depends on the order
//! in which clues were inserted. No rebalancing is performed.
//!
//! All walks over the tree (insert, search, in-order, drop) are iterative,
//! so a degenerate tree built from already-sorted input cannot exhaust the
//! call stack.

use crate::clue::Clue;
use crate::traits::ClueSink;
use std::cmp::Ordering;
use std::fmt;

struct Node {
    clue: Clue,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(clue: Clue) -> Self {
        Self {
            clue,
            left: None,
            right: None,
        }
    }
}

/// Ordered, duplicate-free collection of discovered clues.
///
/// # Examples
///
/// ```
/// use detective_domain::ClueSet;
///
/// let mut clues = ClueSet::new();
/// assert!(clues.insert("pegada de lama"));
/// assert!(clues.insert("faca com impressao parcial"));
/// assert!(!clues.insert("pegada de lama"));
///
/// let sorted: Vec<&str> = clues.in_order().collect();
/// assert_eq!(sorted, ["faca com impressao parcial", "pegada de lama"]);
/// ```
#[derive(Default)]
pub struct ClueSet {
    root: Option<Box<Node>>,
    len: usize,
}

impl ClueSet {
    /// Create an empty clue set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue
    ///
    /// Returns `true` if a new clue was stored. Returns `false` if the clue
    /// was already present (the existing entry is left untouched) or if the
    /// text is empty (silently ignored).
    pub fn insert(&mut self, clue: &str) -> bool {
        let Some(clue) = Clue::new(clue) else {
            return false;
        };

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match clue.as_str().cmp(node.clue.as_str()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return false,
            }
        }

        tracing::debug!(clue = %clue, "clue recorded");
        *slot = Some(Box::new(Node::new(clue)));
        self.len += 1;
        true
    }

    /// Check whether a clue has been collected
    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match clue.cmp(node.clue.as_str()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Iterate over the clues in ascending lexicographic order
    ///
    /// Each call starts a fresh traversal from the smallest clue.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Number of distinct clues collected
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been collected yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the underlying tree (0 for an empty set)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }

        height
    }
}

impl Drop for ClueSet {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for ClueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// Two sets are equal when they hold the same clues, whatever their shape.
impl PartialEq for ClueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order().eq(other.in_order())
    }
}

impl Eq for ClueSet {}

impl<S: AsRef<str>> Extend<S> for ClueSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for clue in iter {
            self.insert(clue.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl ClueSink for ClueSet {
    fn record_clue(&mut self, clue: &str) -> bool {
        self.insert(clue)
    }
}

/// Lazy in-order traversal of a [`ClueSet`]
///
/// Keeps the path of pending ancestors on an explicit stack.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let clues = ClueSet::new();
        assert!(clues.is_empty());
        assert_eq!(clues.len(), 0);
        assert_eq!(clues.height(), 0);
        assert_eq!(clues.in_order().count(), 0);
    }

    #[test]
    fn test_insert_reports_new_clues_only() {
        let mut clues = ClueSet::new();
        assert!(clues.insert("nota ameaçadora"));
        assert!(!clues.insert("nota ameaçadora"));
        assert_eq!(clues.len(), 1);
    }

    #[test]
    fn test_empty_clue_is_ignored() {
        let mut clues = ClueSet::new();
        assert!(!clues.insert(""));
        assert!(clues.is_empty());
        assert!(!clues.contains(""));
    }

    #[test]
    fn test_contains() {
        let clues: ClueSet = ["pegada de lama", "fio de tecido azul"].into_iter().collect();
        assert!(clues.contains("pegada de lama"));
        assert!(clues.contains("fio de tecido azul"));
        assert!(!clues.contains("fio de lã cinza"));
        assert!(!clues.contains("Pegada de lama"));
    }

    #[test]
    fn test_in_order_is_sorted_regardless_of_insertion_order() {
        let clues: ClueSet = [
            "pegada de lama",
            "faca com impressao parcial",
            "nota ameaçadora",
            "fio de tecido azul",
            "lenço rasgado com monograma",
        ]
        .into_iter()
        .collect();

        let sorted: Vec<&str> = clues.in_order().collect();
        assert_eq!(
            sorted,
            [
                "faca com impressao parcial",
                "fio de tecido azul",
                "lenço rasgado com monograma",
                "nota ameaçadora",
                "pegada de lama",
            ]
        );
    }

    #[test]
    fn test_in_order_is_restartable() {
        let clues: ClueSet = ["b", "a", "c"].into_iter().collect();
        let first: Vec<&str> = clues.in_order().collect();
        let second: Vec<&str> = (&clues).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_height_depends_on_insertion_order() {
        let sorted: ClueSet = ["a", "b", "c", "d"].into_iter().collect();
        let balanced: ClueSet = ["b", "a", "c", "d"].into_iter().collect();

        assert_eq!(sorted.height(), 4);
        assert_eq!(balanced.height(), 3);
        assert_eq!(sorted, balanced);
    }

    #[test]
    fn test_degenerate_tree_drops_without_recursion() {
        let clues: ClueSet = (0..10_000).map(|i| format!("{i:08}")).collect();
        assert_eq!(clues.len(), 10_000);
        assert_eq!(clues.height(), 10_000);
        drop(clues);
    }

    #[test]
    fn test_debug_lists_clues_in_order() {
        let clues: ClueSet = ["b", "a"].into_iter().collect();
        assert_eq!(format!("{:?}", clues), r#"{"a", "b"}"#);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: in-order output is strictly ascending for any insertions
        #[test]
        fn test_in_order_strictly_ascending(items in prop::collection::vec(".{0,12}", 0..64)) {
            let clues: ClueSet = items.iter().collect();
            let sorted: Vec<&str> = clues.in_order().collect();

            for pair in sorted.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            prop_assert_eq!(sorted.len(), clues.len());
        }

        /// Property: inserting a clue twice is the same as inserting it once
        #[test]
        fn test_insert_is_idempotent(
            items in prop::collection::vec("[a-z ]{1,8}", 0..32),
            extra in "[a-z ]{1,8}",
        ) {
            let mut once: ClueSet = items.iter().collect();
            once.insert(&extra);

            let mut twice: ClueSet = items.iter().collect();
            twice.insert(&extra);
            prop_assert!(!twice.insert(&extra));

            prop_assert_eq!(once.contains(&extra), twice.contains(&extra));
            prop_assert!(once.in_order().eq(twice.in_order()));
        }

        /// Property: clues never inserted are never reported as contained
        #[test]
        fn test_absent_clues_not_contained(
            items in prop::collection::vec("[a-m]{1,6}", 0..32),
            missing in "[n-z]{1,6}",
        ) {
            let clues: ClueSet = items.iter().collect();
            prop_assert!(!clues.contains(&missing));
        }
    }
}
