use crate::{error::Error, label::LabelProvider};
use util::{DynamicArray, Pair};

/// Externally assigned vertex identifier.
pub type VertexId = i64;

/// Edge weight. Weights are non-negative by construction.
pub type Weight = u32;

/// Sum of weights along a path or across a tree.
pub type Distance = u64;

/// Weight used by [Graph::connect].
pub const DEFAULT_WEIGHT: Weight = 1;

/// An adjacency entry: (neighbor index, weight).
pub(crate) type Adjacent = Pair<usize, Weight>;

#[derive(Clone, Debug)]
pub struct Options {
    /// Number of vertices to reserve room for up front.
    pub vertex_capacity: usize,
}

/// Undirected weighted graph stored as adjacency lists.
///
/// Vertices are addressed by caller-chosen ids and mapped to dense indices in insertion
/// order. Each edge is stored once in each endpoint's list, and parallel edges are kept.
/// Indices stay valid until the graph is cleared.
#[derive(Clone, Default)]
pub struct Graph {
    pub(crate) ids: DynamicArray<VertexId>,
    pub(crate) adjacency: DynamicArray<DynamicArray<Adjacent>>,
    pub(crate) labels: Option<LabelProvider>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            vertex_capacity: DynamicArray::<VertexId>::DEFAULT_CAPACITY,
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            ids: DynamicArray::with_capacity(options.vertex_capacity),
            adjacency: DynamicArray::with_capacity(options.vertex_capacity),
            labels: None,
        }
    }

    /// Append a vertex and return its dense index. Ids are not checked for uniqueness; lookups
    /// resolve to the first vertex added with a given id.
    pub fn add_vertex(&mut self, id: VertexId) -> usize {
        self.ids.add(id);
        self.adjacency.add(DynamicArray::new());
        self.ids.len() - 1
    }

    /// Dense index of `id`, by linear scan over the vertices.
    pub fn get_index(&self, id: VertexId) -> Option<usize> {
        self.ids.iter().position(|v| *v == id)
    }

    /// Add the undirected edge `u - v`. Unknown endpoints leave the graph untouched.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<(), Error> {
        let i = self.resolve(u)?;
        let j = self.resolve(v)?;
        self.adjacency[i].add(Pair::new(j, weight));
        self.adjacency[j].add(Pair::new(i, weight));
        Ok(())
    }

    /// Add the undirected edge `u - v` with [DEFAULT_WEIGHT].
    pub fn connect(&mut self, u: VertexId, v: VertexId) -> Result<(), Error> {
        self.add_edge(u, v, DEFAULT_WEIGHT)
    }

    /// Drop every vertex and edge. The label provider is kept.
    pub fn clear(&mut self) {
        tracing::debug!(vertices = self.ids.len(), "clearing graph");
        self.ids.clear();
        self.adjacency.clear();
    }

    /// Clear, then add `vertices` and `edges` in order. Edges naming a vertex that is not in
    /// `vertices` are skipped and returned.
    pub fn rebuild(
        &mut self,
        vertices: impl IntoIterator<Item = VertexId>,
        edges: impl IntoIterator<Item = (VertexId, VertexId, Weight)>,
    ) -> Vec<(VertexId, VertexId, Weight)> {
        self.clear();
        vertices.into_iter().for_each(|id| {
            self.add_vertex(id);
        });
        let skipped = edges
            .into_iter()
            .filter(|(u, v, w)| self.add_edge(*u, *v, *w).is_err())
            .collect::<Vec<_>>();
        tracing::debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            skipped = skipped.len(),
            "rebuilt graph"
        );
        skipped
    }

    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges, parallel edges counted individually.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.get_index(id).is_some()
    }

    /// Vertex ids in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.ids.iter().copied()
    }

    /// Neighbors of `id` with edge weights, in the order the edges were added.
    pub fn neighbors(&self, id: VertexId) -> Result<Vec<(VertexId, Weight)>, Error> {
        let index = self.resolve(id)?;
        Ok(self.adjacency[index]
            .iter()
            .map(|entry| (self.ids[entry.first], entry.second))
            .collect())
    }

    /// Like [Graph::get_index], but reports an unknown id as a diagnostic and an error.
    pub(crate) fn resolve(&self, id: VertexId) -> Result<usize, Error> {
        self.get_index(id).ok_or_else(|| {
            tracing::warn!(id, "vertex not found");
            Error::VertexNotFound(id)
        })
    }

    pub(crate) fn id(&self, index: usize) -> VertexId {
        self.ids[index]
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[Adjacent] {
        &self.adjacency[index]
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("ids", &self.ids)
            .field("adjacency", &self.adjacency)
            .field("labels", &self.labels.is_some())
            .finish()
    }
}
