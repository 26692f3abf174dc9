use crate::{
    error::Error,
    graph::{Graph, VertexId},
};
use util::{BitSet, Queue, Stack};

impl Graph {
    /// Breadth-first order from `start`.
    ///
    /// A vertex is marked when it is enqueued, so it is enqueued at most once. Neighbors are
    /// explored in adjacency insertion order. Vertices not reachable from `start` are absent.
    pub fn bfs(&self, start: VertexId) -> Result<Vec<VertexId>, Error> {
        let start = self.resolve(start)?;
        let mut visited = BitSet::with_len(self.vertex_count());
        let mut queue = Queue::new();
        let mut order = vec![];

        visited.insert(start);
        queue.enqueue(start);
        while let Ok(u) = queue.dequeue() {
            order.push(self.id(u));
            for entry in self.adjacent(u) {
                if visited.insert(entry.first) {
                    queue.enqueue(entry.first);
                }
            }
        }
        Ok(order)
    }

    /// Depth-first order from `start`, using an explicit stack.
    ///
    /// A vertex is marked when it is popped. After every pop, each neighbor that is not yet
    /// marked is pushed, even if it is already on the stack, so the stack may hold duplicates.
    /// Neighbors are pushed in adjacency order, so the most recently added edge is followed
    /// first.
    pub fn dfs(&self, start: VertexId) -> Result<Vec<VertexId>, Error> {
        let start = self.resolve(start)?;
        let mut visited = BitSet::with_len(self.vertex_count());
        let mut stack = Stack::new();
        let mut order = vec![];

        stack.push(start);
        while let Ok(u) = stack.pop() {
            if visited.insert(u) {
                order.push(self.id(u));
            }
            for entry in self.adjacent(u) {
                if !visited.contains(entry.first) {
                    stack.push(entry.first);
                }
            }
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Graph};

    fn square() -> Graph {
        let mut graph = Graph::new();
        graph.rebuild(1..=4, [(1, 2, 5), (2, 3, 3), (3, 4, 2), (1, 4, 12)]);
        graph
    }

    #[test]
    fn bfs_follows_adjacency_order() {
        assert_eq!(square().bfs(1), Ok(vec![1, 2, 4, 3]));
        assert_eq!(square().bfs(3), Ok(vec![3, 2, 4, 1]));
    }

    #[test]
    fn dfs_follows_last_pushed_neighbor() {
        assert_eq!(square().dfs(1), Ok(vec![1, 4, 3, 2]));
        assert_eq!(square().dfs(2), Ok(vec![2, 3, 4, 1]));
    }

    #[test]
    fn unreachable_vertices_are_skipped() {
        let mut graph = square();
        graph.add_vertex(5);
        graph.add_vertex(6);
        graph.connect(5, 6).unwrap();
        assert_eq!(graph.bfs(1).map(|o| o.len()), Ok(4));
        assert_eq!(graph.dfs(6), Ok(vec![6, 5]));
        assert_eq!(graph.bfs(5), Ok(vec![5, 6]));
    }

    #[test]
    fn unknown_start_is_an_error() {
        let graph = square();
        assert_eq!(graph.bfs(42), Err(Error::VertexNotFound(42)));
        assert_eq!(graph.dfs(42), Err(Error::VertexNotFound(42)));
        assert_eq!(Graph::new().bfs(1), Err(Error::VertexNotFound(1)));
    }

    #[test]
    fn parallel_edges_and_self_loops_visit_once() {
        let mut graph = Graph::new();
        graph.rebuild([1, 2], [(1, 2, 1), (1, 2, 2), (2, 2, 1)]);
        assert_eq!(graph.bfs(1), Ok(vec![1, 2]));
        assert_eq!(graph.dfs(1), Ok(vec![1, 2]));
    }
}
