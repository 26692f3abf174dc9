use crate::collections::{DynamicArray, LinkedList, Pair};
use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

/// Maps a key onto one of a fixed number of buckets.
///
/// Integer keys use `key mod buckets` (euclidean, so negative keys stay in range). Strings
/// use the byte sum mod buckets, which collides for anagrams. Wrap a key in [Hashed] to route
/// it through `ahash` instead.
pub trait BucketKey {
    fn bucket(&self, buckets: usize) -> usize;
}

macro_rules! int_bucket_key {
    ($($ty:ty),*) => {$(
        impl BucketKey for $ty {
            #[inline]
            fn bucket(&self, buckets: usize) -> usize {
                (*self as i128).rem_euclid(buckets as i128) as usize
            }
        }
    )*};
}

int_bucket_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl BucketKey for char {
    fn bucket(&self, buckets: usize) -> usize {
        (*self as u32).bucket(buckets)
    }
}

impl BucketKey for str {
    fn bucket(&self, buckets: usize) -> usize {
        let sum = self.bytes().map(u64::from).fold(0u64, u64::wrapping_add);
        sum.bucket(buckets)
    }
}

impl BucketKey for String {
    fn bucket(&self, buckets: usize) -> usize {
        self.as_str().bucket(buckets)
    }
}

impl<T: BucketKey + ?Sized> BucketKey for &T {
    fn bucket(&self, buckets: usize) -> usize {
        (**self).bucket(buckets)
    }
}

/// Any `Hash` key, bucketed through a fixed-seed `ahash` state so layout is reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hashed<K>(pub K);

impl<K: Hash> BucketKey for Hashed<K> {
    fn bucket(&self, buckets: usize) -> usize {
        let state = ahash::RandomState::with_seeds(
            0x243f_6a88_85a3_08d3,
            0x1319_8a2e_0370_7344,
            0xa409_3822_299f_31d0,
            0x082e_fa98_ec4e_6c89,
        );
        BuildHasher::hash_one(&state, &self.0).bucket(buckets)
    }
}

/// Separate-chaining hash table with a bucket count fixed at construction.
///
/// The table never rehashes, so long chains simply get longer. Keys are unique across the
/// whole table; inserting an existing key overwrites its value in place.
pub struct HashTable<K, V> {
    buckets: DynamicArray<LinkedList<Pair<K, V>>>,
    len: usize,
}

impl<K, V> HashTable<K, V> {
    pub const DEFAULT_BUCKETS: usize = 10;

    pub fn new() -> Self {
        Self::with_buckets(Self::DEFAULT_BUCKETS)
    }

    /// A table with `buckets` chains. Zero is treated as one.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        let mut table = DynamicArray::with_capacity(buckets);
        table.extend((0..buckets).map(|_| LinkedList::new()));
        Self {
            buckets: table,
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The chain stored in bucket `index`, in insertion order.
    pub fn bucket(&self, index: usize) -> Option<&LinkedList<Pair<K, V>>> {
        self.buckets.get(index).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(LinkedList::clear);
        self.len = 0;
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.first, &entry.second)))
    }
}

impl<K: BucketKey + Eq, V> HashTable<K, V> {
    /// Insert or overwrite. Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = key.bucket(self.bucket_count());
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.first == key) {
            return Some(std::mem::replace(&mut entry.second, value));
        }
        bucket.insert_end(Pair::new(key, value));
        self.len += 1;
        None
    }

    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: BucketKey + Eq + ?Sized,
    {
        self.buckets[key.bucket(self.bucket_count())]
            .iter()
            .find(|entry| Borrow::<Q>::borrow(&entry.first) == key)
            .map(|entry| &entry.second)
    }

    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: BucketKey + Eq + ?Sized,
    {
        let index = key.bucket(self.bucket_count());
        self.buckets[index]
            .iter_mut()
            .find(|entry| Borrow::<Q>::borrow(&entry.first) == key)
            .map(|entry| &mut entry.second)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: BucketKey + Eq + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Remove `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: BucketKey + Eq + ?Sized,
    {
        let index = key.bucket(self.bucket_count());
        let bucket = &mut self.buckets[index];
        let position = bucket.position(|entry| Borrow::<Q>::borrow(&entry.first) == key)?;
        let entry = bucket.remove_at(position).ok()?;
        self.len -= 1;
        Some(entry.second)
    }
}

impl<K, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for HashTable<K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for HashTable<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{BucketKey, HashTable, Hashed};

    #[test]
    fn colliding_integer_keys() {
        let mut table = HashTable::with_buckets(5);
        table.insert(1, "one");
        table.insert(6, "six");
        table.insert(11, "eleven");
        assert_eq!(table.bucket(1).map(|b| b.len()), Some(3));
        assert_eq!(table.search(&1), Some(&"one"));
        assert_eq!(table.search(&6), Some(&"six"));
        assert_eq!(table.search(&11), Some(&"eleven"));

        assert_eq!(table.remove(&6), Some("six"));
        assert!(!table.contains(&6));
        assert_eq!(table.search(&6), None);
        assert_eq!(table.search(&1), Some(&"one"));
        assert_eq!(table.search(&11), Some(&"eleven"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn reinsert_overwrites_in_place() {
        let mut table = HashTable::new();
        assert_eq!(table.insert(3, 30), None);
        assert_eq!(table.insert(13, 130), None);
        assert_eq!(table.insert(3, 31), Some(30));
        assert_eq!(table.len(), 2);
        assert_eq!(table.search(&3), Some(&31));
        // The overwritten entry keeps its position at the head of the chain.
        let chain = table.bucket(3).unwrap();
        assert_eq!(chain.front().map(|p| p.first), Some(3));
        *table.search_mut(&13).unwrap() += 1;
        assert_eq!(table.search(&13), Some(&131));
    }

    #[test]
    fn negative_keys_stay_in_range() {
        assert_eq!((-1i32).bucket(5), 4);
        let mut table = HashTable::with_buckets(3);
        table.insert(-7i64, 'a');
        assert!(table.contains(&-7));
        assert_eq!(table.bucket(2).map(|b| b.len()), Some(1));
    }

    #[test]
    fn string_keys_use_byte_sum() {
        assert_eq!("ab".bucket(7), "ba".bucket(7));
        let mut table: HashTable<String, u32> = HashTable::with_buckets(7);
        table.insert("ab".into(), 1);
        table.insert("ba".into(), 2);
        assert_eq!(table.search("ab"), Some(&1));
        assert_eq!(table.search("ba"), Some(&2));
        assert_eq!(table.remove("ab"), Some(1));
        assert!(!table.contains("ab"));
        assert!(table.contains("ba"));
    }

    #[test]
    fn hashed_keys_are_retrievable() {
        let mut table = HashTable::with_buckets(4);
        for n in 0..100u32 {
            table.insert(Hashed((n, n % 3)), n);
        }
        assert_eq!(table.len(), 100);
        assert!((0..100u32).all(|n| table.search(&Hashed((n, n % 3))) == Some(&n)));
        assert_eq!(Hashed("x").bucket(97), Hashed("x").bucket(97));
    }

    #[test]
    fn zero_buckets_is_one() {
        let mut table = HashTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);
        table.insert(9u8, ());
        table.insert(4u8, ());
        assert_eq!(table.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![9, 4]);
        table.clear();
        assert!(table.is_empty());
        assert!(!table.contains(&9));
    }
}
