//! Undirected weighted graph over caller-assigned integer vertex ids.
//!
//! ## Usage
//!
//! ```rust
//! use metro_graph as graph;
//!
//! let mut network = graph::Graph::new();
//! for id in 1..=4 {
//!     network.add_vertex(id);
//! }
//! network.add_edge(1, 2, 5).unwrap();
//! network.add_edge(2, 3, 3).unwrap();
//! network.add_edge(3, 4, 2).unwrap();
//! network.add_edge(1, 4, 12).unwrap();
//!
//! assert_eq!(network.bfs(1).unwrap(), vec![1, 2, 4, 3]);
//! assert!(network.detect_cycle());
//! assert_eq!(network.minimum_spanning_tree().total_weight, 10);
//!
//! let route = network.dijkstra(1, 4).unwrap();
//! assert_eq!(route.distance(), Some(10));
//! assert_eq!(route.path(), Some(&[1, 2, 3, 4][..]));
//! ```
//!
//! Vertices cannot be removed individually. To drop one, [Graph::rebuild] the graph from the
//! surviving vertices and edges.
pub mod error;
pub mod graph;
pub mod label;
pub mod path;
pub mod spanning;

mod cycle;
mod traversal;

pub use error::Error;
pub use graph::*;
pub use label::LabelProvider;
pub use path::{Route, ShortestPath};
pub use spanning::{SpanningEdge, SpanningTree};
