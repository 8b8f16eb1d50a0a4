//! Fallback search towards the frontier of blocked regions, for when the literal destination is
//! blocked or walled off.
use crate::pathing_grid::PathingGrid;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::iproduct;
use log::{debug, info};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

impl<T> PathingGrid<T> {
    /// Collects every open cell orthogonally adjacent to at least one blocked cell. Candidates
    /// are ordered by their heuristic cost to the current end, ties keeping the row-major order
    /// in which they were discovered.
    pub fn compute_targets(&self) -> Vec<Point> {
        let mut targets = FxIndexSet::default();
        for (y, x) in iproduct!(0..self.height() as i32, 0..self.width() as i32) {
            let point = Point::new(x, y);
            if self.is_blocked(point) {
                targets.extend(self.open_neighbours(&point));
            }
        }
        let mut targets = targets.into_iter().collect::<Vec<Point>>();
        targets.sort_by_key(|p| self.get(*p).map_or(i32::MAX, |cell| cell.heuristic_cost));
        targets
    }

    /// Computes the shortest path from the start to any reachable frontier target, trying each
    /// target with an independent search. Among equally short paths the target tried first
    /// wins. The configured end is restored afterwards. Returns an empty path if there are no
    /// targets or none of them can be reached.
    pub fn compute_shortest_path(&mut self) -> Vec<Point> {
        let desired_end = self.end();
        let targets = self.compute_targets();
        self.update();
        let start = self.start();
        let mut shortest: Vec<Point> = Vec::new();
        for target in targets {
            if self.unreachable(&start, &target) {
                debug!("Skipping target {}, not reachable from {}", target, start);
                continue;
            }
            self.set_end_point(target);
            let path = self.astar(start, target);
            debug!("Target {} yields a path of {} cells", target, path.len());
            if !path.is_empty() && (shortest.is_empty() || path.len() < shortest.len()) {
                shortest = path;
            }
        }
        self.set_end_point(desired_end);
        self.reached_end = !shortest.is_empty();
        match shortest.last() {
            Some(target) => info!(
                "Selected target {} with a path of {} cells from {}",
                target,
                shortest.len(),
                start
            ),
            None => info!("No frontier target is reachable from {}", start),
        }
        shortest
    }
}
