// Selection store - the user's accumulated list of chosen repositories
//
// Ordered by selection time, deduplicated by repository id. Lives for the
// session only; nothing here is persisted.

use crate::search::SearchResultItem;

/// A repository the user picked from the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRepo {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub stars: u64,
}

impl From<&SearchResultItem> for SelectedRepo {
    fn from(item: &SearchResultItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            owner: item.owner.clone(),
            stars: item.stars,
        }
    }
}

/// Ordered set of selected repositories keyed by id
#[derive(Debug, Default)]
pub struct SelectionStore {
    entries: Vec<SelectedRepo>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless an entry with the same id is already present
    ///
    /// Returns true if the store changed.
    pub fn add(&mut self, item: &SearchResultItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.entries.push(SelectedRepo::from(item));
        true
    }

    /// Remove the entry with `id`; unknown ids are ignored
    ///
    /// Returns true if the store changed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|repo| repo.id != id);
        self.entries.len() != before
    }

    /// Entries in selection order
    pub fn list(&self) -> &[SelectedRepo] {
        &self.entries
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|repo| repo.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, owner: &str, stars: u64) -> SearchResultItem {
        SearchResultItem {
            id,
            name: name.to_string(),
            owner: owner.to_string(),
            stars,
        }
    }

    fn ids(store: &SelectionStore) -> Vec<u64> {
        store.list().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_add_converts_item() {
        let mut store = SelectionStore::new();
        assert!(store.add(&item(42, "react", "facebook", 200000)));

        assert_eq!(
            store.list(),
            &[SelectedRepo {
                id: 42,
                name: "react".to_string(),
                owner: "facebook".to_string(),
                stars: 200000,
            }]
        );
    }

    #[test]
    fn test_add_is_idempotent() {
        let react = item(42, "react", "facebook", 200000);

        let mut once = SelectionStore::new();
        once.add(&react);

        let mut twice = SelectionStore::new();
        twice.add(&react);
        assert!(!twice.add(&react));

        assert_eq!(once.list(), twice.list());
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_duplicate_id_keeps_first_entry() {
        let mut store = SelectionStore::new();
        store.add(&item(7, "tokio", "tokio-rs", 25000));
        // Same id with drifted metadata (star count changed between searches)
        store.add(&item(7, "tokio", "tokio-rs", 26000));

        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].stars, 25000);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = SelectionStore::new();
        store.add(&item(3, "c", "o", 1));
        store.add(&item(1, "a", "o", 1));
        store.add(&item(2, "b", "o", 1));
        store.add(&item(1, "a", "o", 1));

        assert_eq!(ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = SelectionStore::new();
        store.add(&item(1, "a", "o", 1));
        store.add(&item(2, "b", "o", 1));

        assert!(!store.remove(99));
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_remove_twice() {
        let mut store = SelectionStore::new();
        store.add(&item(42, "react", "facebook", 200000));

        assert!(store.remove(42));
        assert!(store.is_empty());
        assert!(!store.remove(42));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut store = SelectionStore::new();
        store.add(&item(1, "a", "o", 1));
        store.add(&item(2, "b", "o", 1));
        let before = ids(&store);

        store.add(&item(3, "c", "o", 1));
        store.remove(3);

        assert_eq!(ids(&store), before);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut store = SelectionStore::new();
        for id in 1..=4 {
            store.add(&item(id, "r", "o", 0));
        }
        store.remove(2);

        assert_eq!(ids(&store), vec![1, 3, 4]);
        assert!(!store.contains(2));
    }
}
