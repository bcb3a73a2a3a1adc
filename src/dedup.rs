//! Tolerance-aware point deduplication.
//!
//! The solid sweep emits each crossing once per face sharing the crossed
//! edge, and interpolating the same edge from two directions can differ by a
//! few ULPs. Merging those is an explicit clustering pass over a quantized
//! spatial grid — never an epsilon-tolerant `Eq`/`Hash` on the point type,
//! which would break the hash contract and let near-equal points slip into
//! different buckets.

use hashbrown::HashMap;

use crate::float_types::{Real, tolerance};
use crate::point::Point3D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GridCell(i64, i64, i64);

fn quantize(point: &Point3D, inv_cell: Real) -> GridCell {
    GridCell(
        (point.x() * inv_cell).round() as i64,
        (point.y() * inv_cell).round() as i64,
        (point.z() * inv_cell).round() as i64,
    )
}

/// Union-find over point indices; roots are kept at the smallest index so a
/// cluster's representative is its first-seen member.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            let (low, high) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[high] = low;
        }
    }
}

/// Merge points closer than [`tolerance`] into one representative each.
///
/// Points are hashed into tolerance-sized grid cells; any pair within the
/// same or an adjacent cell whose Euclidean distance is below the tolerance
/// is unioned. One representative per cluster is emitted: the first-seen
/// member, in input order, so output is deterministic for a fixed input
/// ordering.
pub fn dedup_points(points: &[Point3D]) -> Vec<Point3D> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let tol = tolerance();
    let inv_cell = 1.0 / tol;

    let mut grid: HashMap<GridCell, Vec<usize>> = HashMap::new();
    let mut clusters = DisjointSet::new(points.len());

    for (i, point) in points.iter().enumerate() {
        let cell = quantize(point, inv_cell);

        // Points within tolerance differ by at most one cell per axis
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor = GridCell(cell.0 + dx, cell.1 + dy, cell.2 + dz);
                    if let Some(occupants) = grid.get(&neighbor) {
                        for &j in occupants {
                            if point.distance(&points[j]) < tol {
                                clusters.union(i, j);
                            }
                        }
                    }
                }
            }
        }

        grid.entry(cell).or_default().push(i);
    }

    (0..points.len())
        .filter(|&i| clusters.find(i) == i)
        .map(|i| points[i])
        .collect()
}
