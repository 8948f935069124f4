// crates/countries-core/src/common.rs
use std::collections::HashSet;
use std::hash::Hash;

/// Insertion-ordered set: a `Vec` for order plus a `HashSet` for membership.
///
/// The first occurrence of a value fixes its position; later ones are ignored.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if the value was not present yet.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.seen.contains(value)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Summary of one build run.
///
/// Returned by [`crate::build_dataset`]. The counts reflect each stage of
/// the pipeline; `duplicates` lists names that occur in more than one
/// output record (first-seen order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub raw_records: usize,
    pub kept_records: usize,
    pub countries: usize,
    pub areas: usize,
    pub duplicates: Vec<String>,
}
