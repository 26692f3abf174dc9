/// A two-field record used for table entries and adjacency entries.
///
/// Equality compares both fields. Ordering is lexicographic, so pairs sort by `first` and
/// only fall back to `second` when the firsts are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<K, V> {
    pub first: K,
    pub second: V,
}

impl<K, V> Pair<K, V> {
    pub fn new(first: K, second: V) -> Self {
        Self { first, second }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.first, self.second)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((first, second): (K, V)) -> Self {
        Self { first, second }
    }
}
