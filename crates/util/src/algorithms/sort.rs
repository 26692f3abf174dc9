/// Repeatedly swap adjacent out-of-order elements. O(n^2).
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Move the smallest remaining element into place on each pass. O(n^2).
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if items[j] < items[min] {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

/// Grow a sorted prefix one element at a time. Stable.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Lomuto-partition quicksort with the last element as pivot.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items);
    let (low, high) = items.split_at_mut(pivot);
    quick_sort(low);
    quick_sort(&mut high[1..]);
}

fn partition<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mut store = 0;
    for j in 0..last {
        if items[j] <= items[last] {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}

/// Top-down merge sort. Stable.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid]);
    merge_sort(&mut items[mid..]);

    let (left, right) = (items[..mid].to_vec(), items[mid..].to_vec());
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Build a max-heap in place, then repeatedly move its root behind the heap.
pub fn heap_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in (0..len / 2).rev() {
        sift_down(items, len, i);
    }
    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, end, 0);
    }
}

fn sift_down<T: Ord>(items: &mut [T], len: usize, mut index: usize) {
    loop {
        let (left, right) = (2 * index + 1, 2 * index + 2);
        let mut largest = index;
        if left < len && items[left] > items[largest] {
            largest = left;
        }
        if right < len && items[right] > items[largest] {
            largest = right;
        }
        if largest == index {
            return;
        }
        items.swap(index, largest);
        index = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    type Sort = fn(&mut [i32]);

    const SORTS: [(&str, Sort); 6] = [
        ("bubble", bubble_sort::<i32>),
        ("selection", selection_sort::<i32>),
        ("insertion", insertion_sort::<i32>),
        ("quick", quick_sort::<i32>),
        ("merge", merge_sort::<i32>),
        ("heap", heap_sort::<i32>),
    ];

    #[test]
    fn all_sorts_agree_with_std() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in [0, 1, 2, 3, 10, 97] {
            let input = (0..len).map(|_| rng.gen_range(-20..20)).collect::<Vec<_>>();
            let mut expected = input.clone();
            expected.sort();
            for (name, sort) in SORTS {
                let mut items = input.clone();
                sort(&mut items);
                assert_eq!(items, expected, "{name} sort, len {len}");
            }
        }
    }

    #[derive(Clone, Debug)]
    struct Tagged(u8, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_order() {
        let input = vec![Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        let tags = |items: &[Tagged]| items.iter().map(|t| t.1).collect::<String>();

        let mut merged = input.clone();
        merge_sort(&mut merged);
        assert_eq!(tags(&merged), "bdac");

        let mut inserted = input;
        insertion_sort(&mut inserted);
        assert_eq!(tags(&inserted), "bdac");
    }
}
