//! First-seen-order deduplication.

use ahash::AHashSet;

/// An insertion-ordered set of strings.
///
/// Iteration yields elements in the order they were first inserted;
/// inserting an element that is already present is a no-op. Equality is
/// exact string equality.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: AHashSet<String>,
}

impl OrderedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedSet {
            items: Vec::with_capacity(capacity),
            seen: AHashSet::with_capacity(capacity),
        }
    }

    /// Insert a value, returning `true` if it was not present yet.
    pub fn insert(&mut self, value: String) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Consume the set, returning the elements in first-insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl FromIterator<String> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = OrderedSet::with_capacity(iter.size_hint().0);
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl Extend<String> for OrderedSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl IntoIterator for OrderedSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Drop later duplicates, keeping each value at its first position.
pub fn dedupe(candidates: Vec<String>) -> Vec<String> {
    candidates.into_iter().collect::<OrderedSet>().into_vec()
}
