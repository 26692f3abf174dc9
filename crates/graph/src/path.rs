use crate::{
    error::Error,
    graph::{Distance, Graph, VertexId},
};
use util::BitSet;

/// A shortest route between two vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub distance: Distance,
    /// From the start vertex to the end vertex, inclusive.
    pub path: Vec<VertexId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShortestPath {
    Reachable(Route),
    /// No path connects the two vertices.
    Unreachable,
}

impl ShortestPath {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    pub fn distance(&self) -> Option<Distance> {
        match self {
            Self::Reachable(route) => Some(route.distance),
            Self::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            Self::Reachable(route) => Some(&route.path),
            Self::Unreachable => None,
        }
    }
}

struct Relaxed {
    distance: Vec<Option<Distance>>,
    parent: Vec<Option<usize>>,
}

impl Graph {
    /// Dijkstra's single-source shortest path from `start` to `end`.
    pub fn dijkstra(&self, start: VertexId, end: VertexId) -> Result<ShortestPath, Error> {
        let s = self.resolve(start)?;
        let e = self.resolve(end)?;
        let relaxed = self.relax_from(s);
        let Some(distance) = relaxed.distance[e] else {
            return Ok(ShortestPath::Unreachable);
        };

        let mut path = vec![];
        let mut current = Some(e);
        while let Some(index) = current {
            path.push(self.id(index));
            current = relaxed.parent[index];
        }
        path.reverse();
        Ok(ShortestPath::Reachable(Route { distance, path }))
    }

    /// Shortest distance from `start` to every vertex, in vertex index order. `None` marks a
    /// vertex that cannot be reached.
    pub fn shortest_distances(
        &self,
        start: VertexId,
    ) -> Result<Vec<(VertexId, Option<Distance>)>, Error> {
        let s = self.resolve(start)?;
        let relaxed = self.relax_from(s);
        Ok(self.vertices().zip(relaxed.distance).collect())
    }

    // O(V^2): each round scans for the closest unprocessed vertex, first index wins ties.
    fn relax_from(&self, s: usize) -> Relaxed {
        let n = self.vertex_count();
        let mut distance = vec![None; n];
        let mut parent = vec![None; n];
        let mut processed = BitSet::with_len(n);
        distance[s] = Some(0);

        for _ in 0..n {
            let mut closest: Option<(usize, Distance)> = None;
            for (index, d) in distance.iter().enumerate() {
                let Some(d) = *d else { continue };
                if processed.contains(index) {
                    continue;
                }
                if closest.map_or(true, |(_, best)| d < best) {
                    closest = Some((index, d));
                }
            }
            let Some((u, du)) = closest else {
                break;
            };
            processed.insert(u);

            for entry in self.adjacent(u) {
                let candidate = du.saturating_add(Distance::from(entry.second));
                let v = entry.first;
                if distance[v].map_or(true, |dv| candidate < dv) {
                    distance[v] = Some(candidate);
                    parent[v] = Some(u);
                }
            }
        }
        Relaxed { distance, parent }
    }
}
