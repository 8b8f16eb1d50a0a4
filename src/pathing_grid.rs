use crate::cell::Cell;
use crate::error::GridError;
use crate::{manhattan_distance, NEUMANN_ORDER};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] owns a `width × height` matrix of optional [Cell]s, where an absent cell is
/// blocked. Alongside the cells it maintains connected components in a [UnionFind] structure so
/// that searches towards goals on another component can be rejected without flood-filling.
///
/// The grid is generic over the payload `T` attached to every cell, which the search never
/// inspects.
#[derive(Clone, Debug)]
pub struct PathingGrid<T = ()> {
    width: usize,
    height: usize,
    cells: Vec<Option<Cell<T>>>,
    start: Point,
    end: Point,
    pub(crate) reached_end: bool,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl<T: Default> PathingGrid<T> {
    /// Creates a grid in which every coordinate holds an open cell with a default payload.
    pub fn new(width: usize, height: usize) -> Result<PathingGrid<T>, GridError> {
        PathingGrid::from_fn(width, height, |_| T::default())
    }
}

impl<T> PathingGrid<T> {
    /// Creates a fully open grid, building the payload of each cell from its coordinate.
    pub fn from_fn<F>(
        width: usize,
        height: usize,
        mut payload: F,
    ) -> Result<PathingGrid<T>, GridError>
    where
        F: FnMut(Point) -> T,
    {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = iproduct!(0..height as i32, 0..width as i32)
            .map(|(y, x)| Some(Cell::new(x, y, payload(Point::new(x, y)))))
            .collect::<Vec<_>>();
        let mut grid = PathingGrid {
            width,
            height,
            cells,
            start: Point::new(0, 0),
            end: Point::new(0, 0),
            reached_end: false,
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.recompute_heuristics();
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    /// Whether the most recent search found a path.
    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    fn check_bounds(&self, x: i32, y: i32) -> Result<Point, GridError> {
        let point = Point::new(x, y);
        if self.in_bounds(point) {
            Ok(point)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
    /// Row-major index of an in-bounds point.
    pub(crate) fn ix(&self, point: Point) -> usize {
        debug_assert!(self.in_bounds(point));
        point.y as usize * self.width + point.x as usize
    }

    pub fn get(&self, point: Point) -> Option<&Cell<T>> {
        if self.in_bounds(point) {
            self.cells[self.ix(point)].as_ref()
        } else {
            None
        }
    }
    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell<T>> {
        if self.in_bounds(point) {
            let ix = self.ix(point);
            self.cells[ix].as_mut()
        } else {
            None
        }
    }
    /// Out-of-bounds coordinates count as blocked.
    pub fn is_blocked(&self, point: Point) -> bool {
        self.get(point).is_none()
    }
    /// Iterates over all open cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<T>> {
        self.cells.iter().flatten()
    }

    /// Removes the cell at the given coordinate. Components are flagged as dirty since blocking
    /// may split a component in two.
    pub fn set_blocked(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let point = self.check_bounds(x, y)?;
        let ix = self.ix(point);
        if self.cells[ix].take().is_some() {
            self.components_dirty = true;
        }
        Ok(())
    }

    /// Installs a caller-supplied cell at its own coordinate, replacing whatever was there. The
    /// heuristic of the cell is recomputed against the current end. Opening a blocked
    /// coordinate joins it with the components of its open neighbours; the components stay
    /// clean.
    pub fn set_cell(&mut self, mut cell: Cell<T>) -> Result<(), GridError> {
        let point = self.check_bounds(cell.x(), cell.y())?;
        cell.heuristic_cost = manhattan_distance(&point, &self.end);
        let ix = self.ix(point);
        let was_blocked = self.cells[ix].is_none();
        self.cells[ix] = Some(cell);
        if was_blocked {
            for n in self.open_neighbours(&point) {
                let n_ix = self.ix(n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    pub fn set_start(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.start = self.check_bounds(x, y)?;
        Ok(())
    }

    /// Sets the destination and recomputes the heuristic of every open cell.
    pub fn set_end(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let end = self.check_bounds(x, y)?;
        self.set_end_point(end);
        Ok(())
    }

    pub(crate) fn set_end_point(&mut self, end: Point) {
        self.end = end;
        self.recompute_heuristics();
    }

    fn recompute_heuristics(&mut self) {
        let end = self.end;
        for cell in self.cells.iter_mut().flatten() {
            cell.heuristic_cost = manhattan_distance(&cell.point(), &end);
        }
    }

    pub(crate) fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.reset_search_state();
        }
    }

    /// The open orthogonal neighbours of a point, in up, left, right, down order.
    pub fn open_neighbours(&self, point: &Point) -> SmallVec<[Point; 4]> {
        NEUMANN_ORDER
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| !self.is_blocked(*p))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to. A blocked point forms a component
    /// of its own.
    pub fn get_component(&self, point: &Point) -> Result<usize, GridError> {
        let point = self.check_bounds(point.x, point.y)?;
        Ok(self.components.find(self.ix(point)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Blocked and out-of-bounds
    /// coordinates are unreachable. The answer is only exact when the components are not dirty.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.is_blocked(*start) || self.is_blocked(*goal) {
            true
        } else {
            !self.components.equiv(self.ix(*start), self.ix(*goal))
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for (y, x) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            let point = Point::new(x, y);
            if self.is_blocked(point) {
                continue;
            }
            let parent_ix = self.ix(point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if !self.is_blocked(p) {
                    let ix = self.ix(p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl<T> fmt::Display for PathingGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_grid(f, &[])
    }
}
