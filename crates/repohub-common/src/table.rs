//! In-memory id → record table
//!
//! Every store service owns one `EntityTable`. Ids come from a monotonic
//! counter, never from the current size, so they stay unique even if records
//! were ever removed. All mutations run under a single write guard.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::models::EntityId;

#[derive(Debug)]
struct Rows<T> {
    last_id: EntityId,
    rows: BTreeMap<EntityId, T>,
}

/// Thread-safe table assigning sequential ids starting at 1
///
/// Iteration follows id order, which is also insertion order.
#[derive(Debug)]
pub struct EntityTable<T> {
    inner: RwLock<Rows<T>>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Rows {
                last_id: 0,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Clone> EntityTable<T> {
    /// Assign the next id, build the record with it and store it
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(EntityId) -> T,
    {
        let mut inner = self.inner.write();
        inner.last_id += 1;
        let id = inner.last_id;
        let record = build(id);
        inner.rows.insert(id, record.clone());
        record
    }

    /// Clone of the record with this id
    pub fn get(&self, id: EntityId) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    /// Clones of all records in insertion order
    pub fn list(&self) -> Vec<T> {
        self.inner.read().rows.values().cloned().collect()
    }

    /// Apply `update` to the first record (insertion order) matching `predicate`
    ///
    /// Returns the updated record, or `None` with the table untouched.
    pub fn update_first<P, F>(&self, predicate: P, update: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write();
        let record = inner.rows.values_mut().find(|r| predicate(r))?;
        update(record);
        Some(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_ids_start_at_one() {
        let table = EntityTable::default();
        let first = table.insert_with(|id| (id, "a"));
        let second = table.insert_with(|id| (id, "b"));

        assert_eq!(first.0, 1);
        assert_eq!(second.0, 2);
        assert_eq!(table.get(2), Some((2, "b")));
        assert_eq!(table.get(3), None);
    }

    #[test]
    fn test_update_first_picks_earliest_match() {
        let table = EntityTable::default();
        table.insert_with(|id| (id, "dup", 0));
        table.insert_with(|id| (id, "dup", 0));

        let updated = table.update_first(|r| r.1 == "dup", |r| r.2 += 1).unwrap();

        assert_eq!(updated, (1, "dup", 1));
        assert_eq!(table.get(2), Some((2, "dup", 0)));
    }

    #[test]
    fn test_update_first_without_match_leaves_table() {
        let table = EntityTable::default();
        table.insert_with(|id| (id, "a"));
        let before = table.list();

        assert!(table.update_first(|r| r.1 == "z", |r| r.1 = "changed").is_none());
        assert_eq!(table.list(), before);
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        let table = Arc::new(EntityTable::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        table.insert_with(|id| id);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ids = table.list();
        assert_eq!(ids.len(), 800);
        assert_eq!(ids, (1..=800).collect::<Vec<_>>());
    }

    proptest! {
        /// Ids increase by one from 1 and listing preserves creation order
        #[test]
        fn prop_sequential_ids(names in prop::collection::vec("[a-z]{0,8}", 0..40)) {
            let table = EntityTable::default();
            let created: Vec<_> = names
                .iter()
                .map(|name| table.insert_with(|id| (id, name.clone())))
                .collect();

            for (index, (id, _)) in created.iter().enumerate() {
                prop_assert_eq!(*id, index as u64 + 1);
            }
            prop_assert_eq!(table.list(), created);
        }
    }
}
