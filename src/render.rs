use crate::cell::CellTag;
use crate::pathing_grid::PathingGrid;
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;

impl<T> PathingGrid<T> {
    /// Writes the grid row by row, marking blocked cells with `X`, path members with `.`,
    /// frontier targets with `*` and any other open cell with `O`.
    pub(crate) fn write_grid<W: fmt::Write>(&self, f: &mut W, path: &[Point]) -> fmt::Result {
        let path = path.iter().copied().collect::<FxHashSet<Point>>();
        let targets = self.compute_targets().into_iter().collect::<FxHashSet<Point>>();
        writeln!(f, "Grid:")?;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let point = Point::new(x, y);
                let symbol = if self.is_blocked(point) {
                    'X'
                } else if path.contains(&point) {
                    '.'
                } else if targets.contains(&point) {
                    '*'
                } else {
                    'O'
                };
                write!(f, " {} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    /// Renders the grid with the given path overlaid.
    pub fn render(&self, path: &[Point]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_grid(&mut out, path);
        out
    }

    /// Formats a path as `tag[x, y] -> tag[x, y] -> ...`.
    pub fn format_path(&self, path: &[Point]) -> String
    where
        T: CellTag,
    {
        path.iter()
            .map(|p| match self.get(*p) {
                Some(cell) => cell.to_string(),
                None => format!("?[{}, {}]", p.x, p.y),
            })
            .join(" -> ")
    }
}
