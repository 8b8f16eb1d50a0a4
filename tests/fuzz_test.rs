/// Fuzzes the search by checking on many random grids that a path is found exactly when the goal
/// shares a connected component with the start, and that found paths are optimal and well formed.
use frontier_astar::{manhattan_distance, PathingGrid, Point};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, density: f64) -> PathingGrid {
    let mut pathing_grid: PathingGrid = PathingGrid::new(w, h).unwrap();
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(density) {
                pathing_grid.set_blocked(x, y).unwrap();
            }
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn random_grid_point(grid: &PathingGrid, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..grid.width()) as i32,
        rng.gen_range(0..grid.height()) as i32,
    )
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Breadth-first distance in moves, used as an independent reference for path lengths.
fn bfs_moves(grid: &PathingGrid, start: Point, goal: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |p: Point| p.y as usize * grid.width() + p.x as usize;
    let mut queue = std::collections::VecDeque::new();
    if grid.is_blocked(start) {
        return None;
    }
    dist[ix(start)] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return Some(dist[ix(p)]);
        }
        for n in grid.open_neighbours(&p) {
            if dist[ix(n)] == usize::MAX {
                dist[ix(n)] = dist[ix(p)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_well_formed(grid: &PathingGrid, path: &[Point], start: Point, end: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for p in path {
        assert!(!grid.is_blocked(*p));
    }
    for step in path.windows(2) {
        assert_eq!(manhattan_distance(&step[0], &step[1]), 1);
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.3);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        grid.set_start(start.x, start.y).unwrap();
        grid.set_end(end.x, end.y).unwrap();
        let reachable = grid.reachable(&start, &end);
        let path = grid.compute_path();
        // Show the grid if a path is not found
        if path.is_empty() == reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(!path.is_empty(), reachable);
        assert_eq!(grid.reached_end(), reachable);
        if reachable {
            assert_well_formed(&grid, &path, start, end);
            assert_eq!(Some(path.len() - 1), bfs_moves(&grid, start, end));
        }
    }
}

#[test]
fn open_grid_paths_have_manhattan_length() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid: PathingGrid = PathingGrid::new(12, 7).unwrap();
    for _ in 0..200 {
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        grid.set_start(start.x, start.y).unwrap();
        grid.set_end(end.x, end.y).unwrap();
        let path = grid.compute_path();
        assert_eq!(path.len() as i32, manhattan_distance(&start, &end) + 1);
        assert_well_formed(&grid, &path, start, end);

        // Swapping the endpoints gives a path of equal length
        grid.set_start(end.x, end.y).unwrap();
        grid.set_end(start.x, start.y).unwrap();
        assert_eq!(grid.compute_path().len(), path.len());
    }
}

#[test]
fn fuzz_frontier_targets() {
    const N: usize = 7;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng, 0.2);
        let start = random_grid_point(&grid, &mut rng);
        let end = random_grid_point(&grid, &mut rng);
        grid.set_start(start.x, start.y).unwrap();
        grid.set_end(end.x, end.y).unwrap();
        let best = grid.compute_shortest_path();
        let targets = grid.compute_targets();
        assert_eq!(grid.end(), end);

        let reachable_lengths = targets
            .iter()
            .filter_map(|t| bfs_moves(&grid, start, *t).map(|moves| moves + 1))
            .collect::<Vec<_>>();
        match reachable_lengths.iter().min() {
            Some(min_len) => {
                assert_eq!(best.len(), *min_len);
                let target = *best.last().unwrap();
                assert!(targets.contains(&target));
                assert_well_formed(&grid, &best, start, target);
                assert!(grid.reached_end());
            }
            None => {
                assert!(best.is_empty());
                assert!(!grid.reached_end());
            }
        }
    }
}
