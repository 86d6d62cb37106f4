use crate::error::SolveError;
use crate::math::DMatrix;

/// A path through the graph as vertex indices.
#[derive(Debug, Clone)]
pub struct IndexPath {
    /// Vertex indices from source to sink inclusive.
    pub indices: Vec<usize>,
    /// Total weight of the traversed edges.
    pub weight: f64,
}

/// Dijkstra's algorithm over a dense weight matrix.
///
/// `weights` must be square with `source` and `sink` within its dimension;
/// entry `(i, j)` is the edge weight between `i` and `j`, zero or negative
/// meaning "no edge". The next vertex is the unvisited one with the
/// smallest finite tentative distance, found by a linear scan that keeps
/// the lowest index on ties. The scan stops as soon as no unvisited vertex
/// has a finite distance.
///
/// # Errors
///
/// Returns `SolveError::PathNotFound` when the search terminates without a
/// predecessor chain from `sink` back to `source`, i.e. the sink is not
/// reachable through positive-weight edges.
pub fn shortest_path(
    weights: &DMatrix,
    source: usize,
    sink: usize,
) -> Result<IndexPath, SolveError> {
    let n = weights.nrows();
    if source == sink {
        return Ok(IndexPath {
            indices: vec![source],
            weight: 0.0,
        });
    }

    let mut dist = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut pred: Vec<Option<usize>> = vec![None; n];
    dist[source] = 0.0;

    let mut current = source;
    loop {
        visited[current] = true;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let w = weights[(current, i)];
            if w <= 0.0 {
                continue;
            }
            let candidate = dist[current] + w;
            if candidate < dist[i] {
                dist[i] = candidate;
                pred[i] = Some(current);
            }
        }

        let mut next = None;
        for i in 0..n {
            if visited[i] || dist[i].is_infinite() {
                continue;
            }
            match next {
                Some(best) if dist[i] >= dist[best] => {}
                _ => next = Some(i),
            }
        }
        match next {
            Some(i) => current = i,
            None => break,
        }
    }

    let mut indices = vec![sink];
    let mut current = sink;
    while current != source {
        match pred[current] {
            Some(prev) => {
                indices.push(prev);
                current = prev;
            }
            None => return Err(SolveError::PathNotFound),
        }
    }
    indices.reverse();

    Ok(IndexPath {
        indices,
        weight: dist[sink],
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn matrix(n: usize, entries: &[(usize, usize, f64)]) -> DMatrix {
        let mut m = DMatrix::zeros(n, n);
        for &(i, j, w) in entries {
            m[(i, j)] = w;
            m[(j, i)] = w;
        }
        m
    }

    #[test]
    fn single_direct_edge() {
        let m = matrix(2, &[(0, 1, 5.0)]);
        let path = shortest_path(&m, 0, 1).unwrap();
        assert_eq!(path.indices, vec![0, 1]);
        assert!((path.weight - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn detour_beats_a_heavier_direct_edge() {
        let m = matrix(3, &[(0, 1, 10.0), (0, 2, 3.0), (2, 1, 4.0)]);
        let path = shortest_path(&m, 0, 1).unwrap();
        assert_eq!(path.indices, vec![0, 2, 1]);
        assert!((path.weight - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn equal_cost_routes_break_ties_by_lowest_index() {
        // Two hops of weight 1 via vertex 2 or vertex 3.
        let m = matrix(4, &[(0, 2, 1.0), (2, 1, 1.0), (0, 3, 1.0), (3, 1, 1.0)]);
        let path = shortest_path(&m, 0, 1).unwrap();
        assert_eq!(path.indices, vec![0, 2, 1]);
        assert!((path.weight - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn unreachable_sink_is_an_error() {
        let m = matrix(3, &[(0, 2, 1.0)]);
        assert!(shortest_path(&m, 0, 1).is_err());
    }

    #[test]
    fn zero_weight_entry_is_no_edge() {
        let m = matrix(2, &[(0, 1, 0.0)]);
        assert!(shortest_path(&m, 0, 1).is_err());
    }

    #[test]
    fn search_terminates_on_a_split_graph() {
        // Two components: {0, 2} and {1, 3}. The scan must stop once every
        // reachable vertex is visited.
        let m = matrix(4, &[(0, 2, 1.0), (1, 3, 1.0)]);
        assert!(shortest_path(&m, 0, 1).is_err());
    }

    #[test]
    fn source_equals_sink() {
        let m = matrix(3, &[(0, 1, 1.0)]);
        let path = shortest_path(&m, 2, 2).unwrap();
        assert_eq!(path.indices, vec![2]);
        assert!(path.weight.abs() < TOLERANCE);
    }

    #[test]
    fn longer_chain_accumulates_weight() {
        let m = matrix(5, &[(0, 2, 2.0), (2, 3, 3.0), (3, 4, 4.0), (4, 1, 5.0)]);
        let path = shortest_path(&m, 0, 1).unwrap();
        assert_eq!(path.indices, vec![0, 2, 3, 4, 1]);
        assert!((path.weight - 14.0).abs() < TOLERANCE);
    }

    #[test]
    fn relaxation_updates_a_longer_provisional_route() {
        // 0-1 direct costs 10; 0-2-3-1 costs 3. The provisional direct
        // distance must be replaced.
        let m = matrix(4, &[(0, 1, 10.0), (0, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]);
        let path = shortest_path(&m, 0, 1).unwrap();
        assert_eq!(path.indices, vec![0, 2, 3, 1]);
        assert!((path.weight - 3.0).abs() < TOLERANCE);
    }
}
