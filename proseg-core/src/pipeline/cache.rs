//! Bounded least-recently-used cache of segmentation results

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

type Key = (String, bool);

/// Entries stamped with a recency counter
///
/// `order` maps each stamp to its key, so finding the least recently used
/// entry and refreshing a hit are both `O(log n)`.
#[derive(Debug, Default)]
struct Entries {
    map: HashMap<Key, (u64, Vec<String>)>,
    order: BTreeMap<u64, Key>,
    clock: u64,
}

impl Entries {
    fn next_stamp(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn get(&mut self, key: &Key) -> Option<Vec<String>> {
        let stamp = self.next_stamp();
        let (old, sentences) = self.map.get_mut(key)?;
        let previous = std::mem::replace(old, stamp);
        let hit = sentences.clone();
        self.order.remove(&previous);
        self.order.insert(stamp, key.clone());
        Some(hit)
    }

    fn insert(&mut self, key: Key, sentences: Vec<String>) {
        let stamp = self.next_stamp();
        if let Some((previous, _)) = self.map.insert(key.clone(), (stamp, sentences)) {
            self.order.remove(&previous);
        }
        self.order.insert(stamp, key);
    }

    fn evict_oldest(&mut self) -> bool {
        match self.order.pop_first() {
            Some((_, key)) => self.map.remove(&key).is_some(),
            None => false,
        }
    }
}

/// Results keyed by `(text, split_dialog)`
///
/// A capacity of zero disables caching.
#[derive(Debug)]
pub struct SegmentCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl SegmentCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, text: &str, split_dialog: bool) -> Option<Vec<String>> {
        if self.capacity == 0 {
            return None;
        }
        self.lock().get(&(text.to_string(), split_dialog))
    }

    pub fn insert(&self, text: &str, split_dialog: bool, sentences: Vec<String>) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        entries.insert((text.to_string(), split_dialog), sentences);
        while entries.map.len() > self.capacity {
            if !entries.evict_oldest() {
                break;
            }
        }
    }

    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.map.clear();
        entries.order.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        // A panic while holding the lock leaves the map consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
