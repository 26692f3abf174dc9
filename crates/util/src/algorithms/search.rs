use std::cmp::Ordering;

/// Index of the first element equal to `key`.
pub fn linear_search<T: PartialEq>(items: &[T], key: &T) -> Option<usize> {
    items.iter().position(|item| item == key)
}

/// Index of an element equal to `key` in an ascending slice. With duplicates, any one of the
/// matching indices may be returned.
pub fn binary_search<T: Ord>(items: &[T], key: &T) -> Option<usize> {
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}
