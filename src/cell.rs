use core::fmt;
use grid_util::point::Point;

/// Short type tag printed in front of a cell's coordinates, e.g. `G[3, 4]`.
pub trait CellTag {
    fn tag(&self) -> &str;
}

impl CellTag for () {
    fn tag(&self) -> &str {
        "N"
    }
}

/// A single open position on the grid together with its search bookkeeping.
///
/// The coordinates are the identity of a cell and cannot change after creation. The cost
/// fields and the parent link are overwritten by every search; the `payload` is owned by the
/// caller and never touched by the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<T = ()> {
    point: Point,
    /// Manhattan distance to the current end.
    pub heuristic_cost: i32,
    /// Cost of the cheapest known path from the start.
    pub accumulated_cost: i32,
    /// Coordinate of the predecessor on the cheapest known path.
    pub parent: Option<Point>,
    pub payload: T,
}

impl<T> Cell<T> {
    pub fn new(x: i32, y: i32, payload: T) -> Cell<T> {
        Cell {
            point: Point::new(x, y),
            heuristic_cost: 0,
            accumulated_cost: 0,
            parent: None,
            payload,
        }
    }
    pub fn x(&self) -> i32 {
        self.point.x
    }
    pub fn y(&self) -> i32 {
        self.point.y
    }
    pub fn point(&self) -> Point {
        self.point
    }
    /// Clears the state left behind by a previous search.
    pub(crate) fn reset_search_state(&mut self) {
        self.accumulated_cost = 0;
        self.parent = None;
    }
}

impl<T: CellTag> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}, {}]", self.payload.tag(), self.point.x, self.point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Wood;

    impl CellTag for Wood {
        fn tag(&self) -> &str {
            "W"
        }
    }

    #[test]
    fn displays_tag_and_coordinates() {
        let cell = Cell::new(3, 4, Wood);
        assert_eq!(cell.to_string(), "W[3, 4]");
        let plain = Cell::new(0, 2, ());
        assert_eq!(plain.to_string(), "N[0, 2]");
    }

    #[test]
    fn reset_clears_cost_and_parent_only() {
        let mut cell = Cell::new(1, 1, Wood);
        cell.heuristic_cost = 7;
        cell.accumulated_cost = 30;
        cell.parent = Some(Point::new(1, 0));
        cell.reset_search_state();
        assert_eq!(cell.accumulated_cost, 0);
        assert_eq!(cell.parent, None);
        assert_eq!(cell.heuristic_cost, 7);
        assert_eq!(cell.point(), Point::new(1, 1));
    }
}
