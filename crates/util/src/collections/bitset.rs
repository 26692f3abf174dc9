/// Dense set of small indices, one bit per index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitSet {
    inner: Vec<u64>,
}

impl BitSet {
    pub fn new() -> Self {
        Self { inner: vec![] }
    }

    /// A set with room for indices `0..len` before it has to grow.
    pub fn with_len(len: usize) -> Self {
        Self {
            inner: vec![0; len.div_ceil(64)],
        }
    }

    /// Set bit `n`. Returns whether it was previously clear.
    #[inline]
    pub fn insert(&mut self, n: usize) -> bool {
        let (word, bit) = (n / 64, n % 64);
        if word >= self.inner.len() {
            self.inner.resize(word + 1, 0);
        }
        let slot = &mut self.inner[word];
        let was_clear = *slot & (1 << bit) == 0;
        *slot |= 1 << bit;
        was_clear
    }

    /// Clear bit `n`. Returns whether it was previously set.
    #[inline]
    pub fn remove(&mut self, n: usize) -> bool {
        let (word, bit) = (n / 64, n % 64);
        let Some(slot) = self.inner.get_mut(word) else {
            return false;
        };
        let was_set = *slot & (1 << bit) != 0;
        *slot &= !(1 << bit);
        was_set
    }

    #[inline]
    pub fn contains(&self, n: usize) -> bool {
        let (word, bit) = (n / 64, n % 64);
        self.inner
            .get(word)
            .is_some_and(|word| *word & (1 << bit) != 0)
    }

    pub fn len(&self) -> usize {
        self.inner.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.iter().all(|word| *word == 0)
    }

    pub fn clear(&mut self) {
        self.inner.iter_mut().for_each(|word| *word = 0);
    }
}

#[cfg(test)]
mod tests {
    use super::BitSet;

    #[test]
    fn insert_contains_remove() {
        let mut set = BitSet::with_len(10);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert!(!set.contains(4));
        assert!(set.insert(64));
        assert!(set.insert(200));
        assert_eq!(set.len(), 3);
        assert!(set.remove(64));
        assert!(!set.remove(64));
        assert!(!set.remove(10_000));
        assert!(!set.contains(64));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn word_boundaries() {
        let mut set = BitSet::new();
        for n in [0, 63, 64, 127, 128] {
            set.insert(n);
        }
        assert!([0, 63, 64, 127, 128].iter().all(|n| set.contains(*n)));
        assert!(![1, 62, 65, 126, 129].iter().any(|n| set.contains(*n)));
    }
}
