use crate::error::ChainspectError;

/// Directed graph over a fixed vertex count with adjacency-list edges.
///
/// Vertices are numbered `0..vertex_count`. Neighbor lists keep insertion
/// order; duplicate edges and self-loops are permitted.
#[derive(Debug, Clone)]
pub struct CycleGraph {
    vertex_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl CycleGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Number of vertices the graph was constructed with.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Neighbors of `vertex` in insertion order; empty for an out-of-range
    /// vertex.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Add a directed edge `from → to`.
    ///
    /// Rejects endpoints outside `0..vertex_count`; duplicates and
    /// self-loops go through.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), ChainspectError> {
        for vertex in [from, to] {
            if vertex >= self.vertex_count {
                return Err(ChainspectError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    /// True iff the graph contains any directed cycle.
    ///
    /// Iterative DFS over (vertex, neighbor-position) frames with `visited`
    /// and `on_stack` marking; an edge into an on-stack vertex is a back
    /// edge. Every unvisited vertex becomes a DFS root, covering
    /// disconnected graphs.
    pub fn has_cycle(&self) -> bool {
        let mut visited = vec![false; self.vertex_count];
        let mut on_stack = vec![false; self.vertex_count];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.vertex_count {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            on_stack[root] = true;
            stack.push((root, 0));

            while let Some((vertex, position)) = stack.last_mut() {
                let vertex = *vertex;
                if let Some(&neighbor) = self.adjacency[vertex].get(*position) {
                    *position += 1;
                    if on_stack[neighbor] {
                        return true;
                    }
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        on_stack[neighbor] = true;
                        stack.push((neighbor, 0));
                    }
                } else {
                    // Frame exhausted: exploration of this vertex is done.
                    on_stack[vertex] = false;
                    stack.pop();
                }
            }
        }
        false
    }
}
