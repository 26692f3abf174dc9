use crate::graph::Graph;
use util::BitSet;

impl Graph {
    /// Whether any connected component contains a cycle.
    ///
    /// Each vertex remembers the edge it was reached by, so stepping straight back along that
    /// edge is not a cycle, while a second edge to the same parent is. Self-loops are cycles.
    pub fn detect_cycle(&self) -> bool {
        let mut visited = BitSet::with_len(self.vertex_count());
        (0..self.vertex_count())
            .any(|root| !visited.contains(root) && self.cycle_from(root, &mut visited))
    }

    fn cycle_from(&self, root: usize, visited: &mut BitSet) -> bool {
        visited.insert(root);
        let mut frames = vec![Frame::new(root, None)];
        while let Some(frame) = frames.last_mut() {
            let Some(entry) = self.adjacent(frame.vertex).get(frame.next) else {
                frames.pop();
                continue;
            };
            frame.next += 1;
            let v = entry.first;
            if Some(v) == frame.parent && !frame.came_back {
                frame.came_back = true;
                continue;
            }
            if !visited.insert(v) {
                return true;
            }
            let u = frame.vertex;
            frames.push(Frame::new(v, Some(u)));
        }
        false
    }
}

// One vertex on the current DFS path.
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    came_back: bool,
    next: usize,
}

impl Frame {
    fn new(vertex: usize, parent: Option<usize>) -> Self {
        Self {
            vertex,
            parent,
            came_back: false,
            next: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;
    use util::Pair;

    fn graph(vertices: &[i64], edges: &[(i64, i64)]) -> Graph {
        let mut graph = Graph::new();
        graph.rebuild(vertices.iter().copied(), edges.iter().map(|(u, v)| (*u, *v, 1)));
        graph
    }

    #[test]
    fn square_has_a_cycle() {
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (1, 4)]);
        assert!(g.detect_cycle());
    }

    #[test]
    fn trees_and_forests_do_not() {
        assert!(!graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (2, 4)]).detect_cycle());
        assert!(!graph(&[1, 2, 3, 4], &[(1, 2), (3, 4)]).detect_cycle());
        assert!(!graph(&[], &[]).detect_cycle());
        assert!(!graph(&[5], &[]).detect_cycle());
    }

    #[test]
    fn parallel_edges_are_a_cycle() {
        assert!(graph(&[1, 2], &[(1, 2), (2, 1)]).detect_cycle());
        assert!(graph(&[1, 2, 3], &[(1, 2), (2, 3), (3, 2)]).detect_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert!(graph(&[1], &[(1, 1)]).detect_cycle());
    }

    #[test]
    fn long_path_and_long_ring() {
        let n = 200_000;
        let mut g = Graph::new();
        for id in 0..n as i64 {
            g.add_vertex(id);
        }
        // Link consecutive indices directly; add_edge resolves ids by linear scan.
        let link = |g: &mut Graph, i: usize, j: usize| {
            g.adjacency[i].add(Pair::new(j, 1));
            g.adjacency[j].add(Pair::new(i, 1));
        };
        for i in 0..n - 1 {
            link(&mut g, i, i + 1);
        }
        assert_eq!(g.edge_count(), n - 1);
        assert!(!g.detect_cycle());
        link(&mut g, 0, n - 1);
        assert!(g.detect_cycle());
    }

    #[test]
    fn cycle_in_a_later_component() {
        let g = graph(&[1, 2, 3, 4, 5], &[(1, 2), (3, 4), (4, 5), (5, 3)]);
        assert!(g.detect_cycle());
    }
}
