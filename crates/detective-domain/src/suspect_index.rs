//! Suspect index - which suspect each clue points at
//!
//! A fixed-size hash table with separate chaining: clue text is hashed with
//! djb2 and each bucket holds a small chain of entries. The bucket count never
//! changes after construction, so heavy skew only costs lookup time, never
//! correctness.

use crate::traits::SuspectLookup;

/// Bucket count used by [`SuspectIndex::new`]
pub const DEFAULT_BUCKET_COUNT: usize = 31;

/// djb2 string hash (`h = h * 33 + byte`, seeded with 5381)
///
/// # Examples
///
/// ```
/// use detective_domain::suspect_index::djb2;
///
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("a"), 5381 * 33 + 97);
/// ```
pub fn djb2(text: &str) -> u64 {
    text.bytes()
        .fold(5381u64, |hash, byte| hash.wrapping_mul(33).wrapping_add(u64::from(byte)))
}

/// Outcome of [`SuspectIndex::associate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Association {
    /// The clue had no suspect before
    Created,
    /// The clue already had a suspect, which was overwritten
    Replaced,
    /// Empty clue or suspect; nothing changed
    Ignored,
}

#[derive(Debug, Clone)]
struct Entry {
    clue: Box<str>,
    suspect: Box<str>,
}

/// Mapping from clue text to the suspect it implicates.
///
/// Each clue maps to at most one suspect; re-associating a clue replaces its
/// suspect (last write wins).
///
/// # Examples
///
/// ```
/// use detective_domain::SuspectIndex;
///
/// let index = SuspectIndex::build([
///     ("pegada de lama", "Carlos"),
///     ("nota ameaçadora", "Daniel"),
/// ]);
///
/// assert_eq!(index.lookup("pegada de lama"), Some("Carlos"));
/// assert_eq!(index.lookup("fio de lã cinza"), None);
/// ```
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl SuspectIndex {
    /// Create an empty index with [`DEFAULT_BUCKET_COUNT`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty index with a fixed number of buckets (at least one)
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            len: 0,
        }
    }

    /// Build an index from an ordered table of `(clue, suspect)` pairs
    ///
    /// Pairs are applied in order, so a clue listed twice keeps its last
    /// suspect. Pairs with an empty side are skipped.
    pub fn build<I, C, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for (clue, suspect) in entries {
            index.associate(clue.as_ref(), suspect.as_ref());
        }
        index
    }

    /// Associate a clue with a suspect
    pub fn associate(&mut self, clue: &str, suspect: &str) -> Association {
        if clue.is_empty() || suspect.is_empty() {
            return Association::Ignored;
        }

        let slot = self.bucket_of(clue);
        let chain = &mut self.buckets[slot];

        if let Some(entry) = chain.iter_mut().find(|e| &*e.clue == clue) {
            tracing::debug!(clue, previous = %entry.suspect, suspect, "suspect replaced");
            entry.suspect = suspect.into();
            return Association::Replaced;
        }

        chain.push(Entry {
            clue: clue.into(),
            suspect: suspect.into(),
        });
        self.len += 1;
        Association::Created
    }

    /// Look up the suspect a clue implicates
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .find(|e| &*e.clue == clue)
            .map(|e| &*e.suspect)
    }

    /// Number of clues with a suspect
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no clue has a suspect
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All `(clue, suspect)` pairs, in bucket order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|e| (&*e.clue, &*e.suspect))
    }

    /// Distinct suspect names, sorted
    pub fn suspects(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries().map(|(_, suspect)| suspect).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    fn bucket_of(&self, clue: &str) -> usize {
        (djb2(clue) % self.buckets.len() as u64) as usize
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectLookup for SuspectIndex {
    fn suspect_for(&self, clue: &str) -> Option<&str> {
        self.lookup(clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("ab"), (5381 * 33 + 97) * 33 + 98);
    }

    #[test]
    fn test_associate_and_lookup() {
        let mut index = SuspectIndex::new();
        assert_eq!(index.associate("nota ameaçadora", "Daniel"), Association::Created);
        assert_eq!(index.lookup("nota ameaçadora"), Some("Daniel"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_reassociation_overwrites() {
        let mut index = SuspectIndex::new();
        index.associate("pegada de lama", "Carlos");
        assert_eq!(index.associate("pegada de lama", "Ana"), Association::Replaced);
        assert_eq!(index.lookup("pegada de lama"), Some("Ana"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_arguments_are_ignored() {
        let mut index = SuspectIndex::new();
        assert_eq!(index.associate("", "Carlos"), Association::Ignored);
        assert_eq!(index.associate("pegada de lama", ""), Association::Ignored);
        assert!(index.is_empty());
        assert_eq!(index.lookup(""), None);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let index = SuspectIndex::build([("pegada de lama", "Carlos")]);
        assert_eq!(index.lookup("fio de lã cinza"), None);
        assert_eq!(index.lookup("Pegada de lama"), None);
    }

    #[test]
    fn test_single_bucket_still_correct() {
        let mut index = SuspectIndex::with_buckets(1);
        index.associate("a", "Ana");
        index.associate("b", "Beatriz");
        index.associate("c", "Carlos");

        assert_eq!(index.bucket_count(), 1);
        assert_eq!(index.longest_chain(), 3);
        assert_eq!(index.lookup("b"), Some("Beatriz"));
    }

    #[test]
    fn test_zero_buckets_rounds_up() {
        let index = SuspectIndex::with_buckets(0);
        assert_eq!(index.bucket_count(), 1);
    }

    #[test]
    fn test_build_is_last_write_wins() {
        let index = SuspectIndex::build([("x", "Ana"), ("x", "Daniel")]);
        assert_eq!(index.lookup("x"), Some("Daniel"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_suspects_are_distinct_and_sorted() {
        let index = SuspectIndex::build([
            ("a", "Carlos"),
            ("b", "Ana"),
            ("c", "Carlos"),
        ]);
        assert_eq!(index.suspects(), ["Ana", "Carlos"]);
    }
}
