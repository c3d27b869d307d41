//! Connected-component clustering on a voxel grid.

use std::collections::HashMap;

use crate::Point;

/// Disjoint-set forest with union by rank and path splitting.
#[derive(Debug)]
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, u: usize) -> usize {
        let mut r = u;
        while self.parent[r] != r {
            self.parent[r] = self.parent[self.parent[r]];
            r = self.parent[r];
        }
        r
    }

    fn union(&mut self, x: usize, y: usize) {
        let u = self.find(x);
        let v = self.find(y);
        if u == v {
            return;
        }

        let (low, high) = if self.rank[u] < self.rank[v] {
            (u, v)
        } else {
            (v, u)
        };
        self.parent[low] = high;
        if self.rank[low] == self.rank[high] {
            self.rank[high] = self.rank[high].saturating_add(1);
        }
    }
}

/// Half of the 26-neighbourhood; the other half is covered from the neighbour's side.
const FORWARD_NEIGHBOURS: [[i64; 3]; 13] = [
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// Groups points whose voxels touch (26-connectivity).
///
/// The voxel grid is the bounding cube of the points split `2^octree_level`
/// times along each axis, the same cells an octree of that depth would have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedComponents {
    pub octree_level: u8,
}

impl ConnectedComponents {
    #[must_use]
    pub const fn new(octree_level: u8) -> Self {
        Self { octree_level }
    }

    /// Component id of every point.
    ///
    /// Ids are dense and numbered in the order components are first met
    /// when scanning `points`. Non-finite points get a component of their own.
    #[must_use]
    pub fn label(&self, points: &[Point]) -> Vec<usize> {
        let Some((min, extent)) = bounds(points) else {
            return (0..points.len()).collect();
        };
        let cells = 1_i64 << self.octree_level.min(upc_config::MAX_OCTREE_LEVEL);
        #[allow(clippy::cast_precision_loss)]
        let cell_size = extent / cells as f64;

        let mut voxel_ids: HashMap<[i64; 3], usize> = HashMap::new();
        let mut point_voxels: Vec<Option<usize>> = Vec::with_capacity(points.len());
        for point in points {
            if point.iter().any(|v| !v.is_finite()) {
                point_voxels.push(None);
                continue;
            }
            let key = voxel_key(point, &min, cell_size, cells);
            let next = voxel_ids.len();
            point_voxels.push(Some(*voxel_ids.entry(key).or_insert(next)));
        }

        let mut forest = UnionFind::new(voxel_ids.len());
        for (key, &id) in &voxel_ids {
            for offset in FORWARD_NEIGHBOURS {
                let neighbour = [key[0] + offset[0], key[1] + offset[1], key[2] + offset[2]];
                if let Some(&other) = voxel_ids.get(&neighbour) {
                    forest.union(id, other);
                }
            }
        }

        let mut dense: HashMap<usize, usize> = HashMap::new();
        let mut next_id = 0;
        point_voxels
            .into_iter()
            .map(|voxel| {
                let Some(voxel) = voxel else {
                    next_id += 1;
                    return next_id - 1;
                };
                let root = forest.find(voxel);
                *dense.entry(root).or_insert_with(|| {
                    next_id += 1;
                    next_id - 1
                })
            })
            .collect()
    }

    /// Number of points in each component, indexed by component id.
    #[must_use]
    pub fn sizes(components: &[usize]) -> Vec<usize> {
        let count = components.iter().max().map_or(0, |max| max + 1);
        let mut sizes = vec![0; count];
        for &component in components {
            sizes[component] += 1;
        }
        sizes
    }
}

/// Minimum corner and largest side of the finite points' bounding box.
fn bounds(points: &[Point]) -> Option<(Point, f64)> {
    let mut finite = points.iter().filter(|p| p.iter().all(|v| v.is_finite()));
    let first = *finite.next()?;
    let (min, max) = finite.fold((first, first), |(mut min, mut max), p| {
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
        (min, max)
    });
    let extent = (0..3).map(|axis| max[axis] - min[axis]).fold(0.0, f64::max);
    Some((min, extent))
}

#[allow(clippy::cast_possible_truncation)]
fn voxel_key(point: &Point, min: &Point, cell_size: f64, cells: i64) -> [i64; 3] {
    if cell_size <= 0.0 {
        return [0, 0, 0];
    }
    let mut key = [0_i64; 3];
    for axis in 0..3 {
        let index = ((point[axis] - min[axis]) / cell_size).floor() as i64;
        key[axis] = index.clamp(0, cells - 1);
    }
    key
}
