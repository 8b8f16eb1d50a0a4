//! Single-pair A* over the cells of a [PathingGrid]. The accumulated cost and parent link of
//! each visited cell are written into the cell itself, and cleared again at the start of every
//! search.
use crate::pathing_grid::PathingGrid;
use crate::MOVE_COST;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::{info, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct SmallestCostHolder {
    estimated_cost: i32,
    cost: i32,
    sequence: usize,
    point: Point,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost
            && self.cost == other.cost
            && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the larger accumulated cost, and
        // finally the earliest insertion so that neighbour order decides remaining ties
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Priority queue of open points with a membership index. A point whose cost improves while it
/// is open is pushed again; the outdated heap entry is dropped when it surfaces.
#[derive(Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<SmallestCostHolder>,
    members: FxHashSet<Point>,
    sequence: usize,
}

impl OpenSet {
    pub(crate) fn contains(&self, point: &Point) -> bool {
        self.members.contains(point)
    }

    pub(crate) fn push(&mut self, point: Point, cost: i32, heuristic: i32) {
        self.members.insert(point);
        self.heap.push(SmallestCostHolder {
            estimated_cost: cost + heuristic,
            cost,
            sequence: self.sequence,
            point,
        });
        self.sequence += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        while let Some(SmallestCostHolder { point, .. }) = self.heap.pop() {
            if self.members.remove(&point) {
                return Some(point);
            }
        }
        None
    }
}

impl<T> PathingGrid<T> {
    /// Computes a shortest path from the current start to the current end. The returned path
    /// contains both endpoints; it is empty if the end cannot be reached or either endpoint is
    /// blocked.
    pub fn compute_path(&mut self) -> Vec<Point> {
        self.update();
        let (start, end) = (self.start(), self.end());
        let path = if self.unreachable(&start, &end) {
            info!("{} is not reachable from {}", end, start);
            Vec::new()
        } else {
            self.astar(start, end)
        };
        self.reached_end = !path.is_empty();
        path
    }

    /// Runs A* towards `end`, which must be the end the heuristic field was seeded for.
    pub(crate) fn astar(&mut self, start: Point, end: Point) -> Vec<Point> {
        self.reset_search_state();
        let start_heuristic = match self.get(start) {
            Some(cell) => cell.heuristic_cost,
            None => return Vec::new(),
        };
        let mut closed = BoolGrid::new(self.width(), self.height(), false);
        let mut open = OpenSet::default();
        open.push(start, 0, start_heuristic);

        while let Some(current) = open.pop() {
            closed.set_point(current, true);
            if current == end {
                return self.reconstruct_path(end);
            }
            let current_cost = match self.get(current) {
                Some(cell) => cell.accumulated_cost,
                None => continue,
            };
            for neighbour in self.open_neighbours(&current) {
                if closed.get_point(neighbour) {
                    continue;
                }
                let candidate_cost = current_cost + MOVE_COST;
                let is_open = open.contains(&neighbour);
                let Some(cell) = self.get_mut(neighbour) else {
                    continue;
                };
                if !is_open || candidate_cost < cell.accumulated_cost {
                    cell.accumulated_cost = candidate_cost;
                    cell.parent = Some(current);
                    let heuristic = cell.heuristic_cost;
                    open.push(neighbour, candidate_cost, heuristic);
                }
            }
        }
        warn!(
            "Reachable goal {} could not be pathed to from {}, are the components correct?",
            end, start
        );
        Vec::new()
    }

    /// Follows parent links back from `end` and returns the path in start-to-end order.
    fn reconstruct_path(&self, end: Point) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(end), |p| self.get(*p).and_then(|cell| cell.parent))
                .collect();
        path.reverse();
        path
    }
}
