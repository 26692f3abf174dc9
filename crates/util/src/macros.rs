/// Build a [`LinkedList`](crate::LinkedList) from its elements, front first.
#[macro_export]
macro_rules! list {
    () => { $crate::LinkedList::new() };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::LinkedList::new();
        $(list.insert_end($value);)+
        list
    }};
}

/// Build a [`DynamicArray`](crate::DynamicArray) from its elements.
#[macro_export]
macro_rules! array {
    () => { $crate::DynamicArray::new() };
    ($($value:expr),+ $(,)?) => {{
        let mut array = $crate::DynamicArray::new();
        $(array.add($value);)+
        array
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn builds_in_order() {
        let list: crate::LinkedList<i32> = crate::list![3, 1, 2];
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);

        let array: crate::DynamicArray<&str> = crate::array!["a", "b"];
        assert_eq!(array.as_slice(), &["a", "b"]);

        let empty: crate::LinkedList<u8> = crate::list![];
        assert!(empty.is_empty());
    }
}
