use crate::graph::{Distance, Graph, VertexId, Weight};
use util::BitSet;

/// An edge selected for the spanning tree. `from` was already in the tree when `to` joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanningEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpanningTree {
    /// Ascending by weight; equal weights keep the order in which their vertices joined.
    pub edges: Vec<SpanningEdge>,
    pub total_weight: Distance,
    /// Vertices outside the root's component, in index order.
    pub unreached: Vec<VertexId>,
}

impl SpanningTree {
    /// Whether the tree covers every vertex of the graph.
    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty()
    }
}

impl Graph {
    /// Prim's minimum spanning tree, always grown from the first vertex added (index 0).
    ///
    /// Each round scans for the cheapest unprocessed key. When a vertex joins, the edge that
    /// last lowered its key is the cheapest edge linking it to the tree so far, and is the one
    /// recorded. A disconnected graph yields the tree of the root's component and lists the
    /// remaining vertices in [SpanningTree::unreached].
    pub fn minimum_spanning_tree(&self) -> SpanningTree {
        let n = self.vertex_count();
        if n == 0 {
            return SpanningTree::default();
        }
        let mut key: Vec<Option<Weight>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut in_tree = BitSet::with_len(n);
        let mut edges = vec![];
        key[0] = Some(0);

        for _ in 0..n {
            let mut cheapest: Option<(usize, Weight)> = None;
            for (index, k) in key.iter().enumerate() {
                let Some(k) = *k else { continue };
                if in_tree.contains(index) {
                    continue;
                }
                if cheapest.map_or(true, |(_, best)| k < best) {
                    cheapest = Some((index, k));
                }
            }
            let Some((u, weight)) = cheapest else {
                break;
            };
            in_tree.insert(u);
            if let Some(p) = parent[u] {
                edges.push(SpanningEdge {
                    from: self.id(p),
                    to: self.id(u),
                    weight,
                });
            }

            for entry in self.adjacent(u) {
                let v = entry.first;
                if !in_tree.contains(v) && key[v].map_or(true, |k| entry.second < k) {
                    key[v] = Some(entry.second);
                    parent[v] = Some(u);
                }
            }
        }

        edges.sort_by_key(|edge| edge.weight);
        let total_weight = edges.iter().map(|edge| Distance::from(edge.weight)).sum();
        let unreached = (0..n)
            .filter(|index| !in_tree.contains(*index))
            .map(|index| self.id(index))
            .collect();
        SpanningTree {
            edges,
            total_weight,
            unreached,
        }
    }
}
