pub mod array;
pub use array::DynamicArray;

pub mod bitset;
pub use bitset::BitSet;

pub mod hash_table;
pub use hash_table::{BucketKey, HashTable, Hashed};

pub mod heap;
pub use heap::MinHeap;

pub mod list;
pub use list::LinkedList;

pub mod ordered_map;
pub use ordered_map::OrderedMap;

pub mod pair;
pub use pair::Pair;

pub mod queue;
pub use queue::Queue;

pub mod stack;
pub use stack::Stack;

pub mod tree;
pub use tree::Bst;
