use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts for distinct items, remembering first-seen order.
/// Ranking ties resolve by first appearance, so identical input always
/// produces identical output.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Eq + Hash + Clone> {
    counts: HashMap<T, usize>,
    order: Vec<T>,
    total: usize,
}

impl<T: Eq + Hash + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut table = Self::new();
        for item in items {
            table.push(item);
        }
        table
    }

    pub fn push(&mut self, item: T) {
        self.total += 1;
        match self.counts.entry(item) {
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(1);
            }
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
        }
    }

    /// Count for one item; 0 if never seen.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of items consumed. For unigrams this equals the token
    /// sequence length.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct items.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Top `k` items by count, descending. The sort is stable over
    /// first-seen order, so equal counts rank in order of appearance.
    pub fn top_k(&self, k: usize) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .order
            .iter()
            .map(|item| (item.clone(), self.counts[item]))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// All `(item, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.order.iter().map(|item| (item, self.counts[item]))
    }
}

impl<T: Eq + Hash + Clone> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
