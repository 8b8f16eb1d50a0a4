//! # frontier_astar
//!
//! A* pathfinding on a uniform-cost, 4-connected grid. Besides plain single-pair search the
//! grid can look for the nearest reachable *frontier target*: an open cell bordering a blocked
//! one. This is useful when the literal destination is itself blocked or walled off.
//!
//! Cells carry their own search bookkeeping together with an arbitrary payload, so a game can
//! attach terrain or other metadata to the grid it searches. Connected components are tracked
//! with a [UnionFind](petgraph::unionfind::UnionFind) to reject unreachable goals without
//! flood-filling.
//!
//! ```
//! use frontier_astar::{PathingGrid, Point};
//!
//! let mut grid: PathingGrid = PathingGrid::new(3, 3).unwrap();
//! grid.set_blocked(1, 1).unwrap();
//! grid.set_start(0, 0).unwrap();
//! grid.set_end(2, 2).unwrap();
//! let path = grid.compute_path();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.last(), Some(&Point::new(2, 2)));
//! ```
mod astar;
pub mod cell;
pub mod error;
pub mod pathing_grid;
mod render;
mod targets;

pub use cell::{Cell, CellTag};
pub use error::GridError;
pub use grid_util::point::Point;
pub use pathing_grid::PathingGrid;

/// Cost of a single orthogonal move.
pub const MOVE_COST: i32 = 10;

/// Offsets of the orthogonal neighbourhood in exploration order: up, left, right, down.
pub const NEUMANN_ORDER: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Number of orthogonal moves between two points on an open grid.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}
