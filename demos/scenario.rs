use frontier_astar::{Cell, CellTag, PathingGrid};

// Two scenarios on grids whose cells carry a terrain type.
//
// The first finds a path on a 5x5 grid from the top-left to the bottom-right corner around a
// small wall. The second asks for the nearest frontier target on a 10x10 grid: an open cell
// next to a blocked one.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Terrain {
    #[default]
    Grass,
    Wood,
}

impl CellTag for Terrain {
    fn tag(&self) -> &str {
        match self {
            Terrain::Grass => "G",
            Terrain::Wood => "W",
        }
    }
}

fn main() -> Result<(), frontier_astar::GridError> {
    let mut grid: PathingGrid<Terrain> = PathingGrid::new(5, 5)?;
    for (x, y) in [(0, 1), (3, 1), (3, 2), (3, 3)] {
        grid.set_blocked(x, y)?;
    }
    grid.set_cell(Cell::new(2, 2, Terrain::Wood))?;
    grid.set_start(0, 0)?;
    grid.set_end(4, 4)?;
    let path = grid.compute_path();
    if grid.reached_end() {
        println!("Path:\n{}", grid.format_path(&path));
    } else {
        println!("No possible path");
    }
    println!("{}", grid.render(&path));

    let mut grid: PathingGrid<Terrain> = PathingGrid::from_fn(10, 10, |p| {
        if (p.x + p.y) % 7 == 0 {
            Terrain::Wood
        } else {
            Terrain::Grass
        }
    })?;
    for (x, y) in [(1, 4), (3, 1), (3, 2), (3, 3)] {
        grid.set_blocked(x, y)?;
    }
    grid.set_start(0, 0)?;
    grid.set_end(4, 4)?;
    println!("{}", grid);
    let path = grid.compute_shortest_path();
    if grid.reached_end() {
        println!("Path:\n{}", grid.format_path(&path));
    } else {
        println!("No possible path");
    }
    println!("{}", grid.render(&path));
    Ok(())
}
