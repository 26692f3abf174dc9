//! Generic containers and small algorithms shared by the metro workspace.
//!
//! Everything here is single-threaded and owned by its caller. Fallible operations return
//! [`Error`] rather than panicking or handing back default values.
pub mod algorithms;
pub mod collections;
pub mod error;
pub mod macros;

pub use collections::{
    Bst, BitSet, BucketKey, DynamicArray, HashTable, Hashed, LinkedList, MinHeap, OrderedMap,
    Pair, Queue, Stack,
};
pub use error::Error;
