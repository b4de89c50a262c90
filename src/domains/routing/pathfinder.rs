use super::grid::Grid;
use super::types::GridCell;
use std::collections::{HashSet, VecDeque};

/// Neighbour order used for expansion: right, down, left, up.
/// Equal-length routes are tie-broken by this order.
const NEIGHBOURS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Shortest 4-connected route from `start` to `end`, both included.
///
/// Returns `[start]` when `start == end` and an empty vector when `end`
/// cannot be reached. Blocked endpoints are still searched: a blocked `start`
/// is expanded from and a blocked `end` may be entered as the final step.
pub fn find_path(grid: &Grid, start: GridCell, end: GridCell) -> Vec<GridCell> {
    if start == end {
        return vec![start];
    }

    let mut visited: HashSet<GridCell> = HashSet::new();
    let mut queue: VecDeque<Vec<GridCell>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(prefix) = queue.pop_front() {
        let Some(&current) = prefix.last() else {
            continue;
        };
        // Visited on dequeue: duplicates may sit in the queue, only the first
        // (shortest) one expands.
        if !visited.insert(current) {
            continue;
        }
        if current == end {
            return prefix;
        }

        for next in neighbours(current) {
            if (next == end || grid.is_walkable(next)) && !visited.contains(&next) {
                let mut extended = Vec::with_capacity(prefix.len() + 1);
                extended.extend_from_slice(&prefix);
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    Vec::new()
}

fn neighbours(cell: GridCell) -> impl Iterator<Item = GridCell> {
    NEIGHBOURS.iter().filter_map(move |&(dr, dc)| {
        Some(GridCell {
            row: cell.row.checked_add_signed(dr)?,
            col: cell.col.checked_add_signed(dc)?,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cell(row: usize, col: usize) -> GridCell {
        GridCell::new(row, col)
    }

    /// Exhaustive BFS distance map used as the optimality oracle. `end` may
    /// be entered even when blocked but is never expanded from.
    fn distances(grid: &Grid, start: GridCell, end: GridCell) -> Vec<Vec<Option<usize>>> {
        let (rows, cols) = grid.dimensions();
        let mut dist = vec![vec![None; cols]; rows];
        let mut queue = VecDeque::new();
        dist[start.row][start.col] = Some(0);
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            let d = dist[c.row][c.col].unwrap_or(0);
            for n in neighbours(c) {
                if !grid.contains(n) || dist[n.row][n.col].is_some() {
                    continue;
                }
                if grid.is_walkable(n) {
                    dist[n.row][n.col] = Some(d + 1);
                    queue.push_back(n);
                } else if n == end {
                    dist[n.row][n.col] = Some(d + 1);
                }
            }
        }
        dist
    }

    fn assert_valid_walk(grid: &Grid, path: &[GridCell]) {
        for pair in path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dr + dc, 1, "non-adjacent step {} -> {}", pair[0], pair[1]);
        }
        if path.len() > 2 {
            for c in &path[1..path.len() - 1] {
                assert!(grid.is_walkable(*c), "walked through blocked cell {}", c);
            }
        }
    }

    #[test]
    fn test_start_equals_end() {
        let grid = Grid::from_ascii(&["..", ".."]).unwrap();
        assert_eq!(find_path(&grid, cell(1, 1), cell(1, 1)), vec![cell(1, 1)]);
    }

    #[test]
    fn test_start_equals_end_on_blocked_cell() {
        let grid = Grid::from_ascii(&[".#"]).unwrap();
        assert_eq!(find_path(&grid, cell(0, 1), cell(0, 1)), vec![cell(0, 1)]);
    }

    #[test]
    fn test_straight_corridor() {
        let grid = Grid::from_ascii(&["....."]).unwrap();
        let path = find_path(&grid, cell(0, 0), cell(0, 4));
        assert_eq!(path, (0..5).map(|c| cell(0, c)).collect::<Vec<_>>());
    }

    #[test]
    fn test_three_by_three_with_single_gap() {
        // Walls on the border except the gap at (1, 2).
        let grid = Grid::from_ascii(&["###", "...", "###"]).unwrap();
        let path = find_path(&grid, cell(1, 0), cell(1, 2));
        assert_eq!(path, vec![cell(1, 0), cell(1, 1), cell(1, 2)]);
    }

    #[test]
    fn test_routes_around_wall() {
        let grid = Grid::from_ascii(&[
            ".....", //
            ".###.", //
            ".#...", //
            ".#.#.", //
            "...#.", //
        ])
        .unwrap();
        let path = find_path(&grid, cell(2, 2), cell(4, 0));
        assert_valid_walk(&grid, &path);
        assert_eq!(path.first(), Some(&cell(2, 2)));
        assert_eq!(path.last(), Some(&cell(4, 0)));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn test_tie_break_prefers_right_then_down() {
        let grid = Grid::from_ascii(&["..", ".."]).unwrap();
        let path = find_path(&grid, cell(0, 0), cell(1, 1));
        assert_eq!(path, vec![cell(0, 0), cell(0, 1), cell(1, 1)]);
    }

    #[test]
    fn test_full_wall_is_unreachable() {
        let grid = Grid::from_ascii(&["..#..", "..#..", "..#.."]).unwrap();
        assert!(find_path(&grid, cell(0, 0), cell(2, 4)).is_empty());
    }

    #[test]
    fn test_blocked_end_is_entered_last() {
        let grid = Grid::from_ascii(&["..#"]).unwrap();
        let path = find_path(&grid, cell(0, 0), cell(0, 2));
        assert_eq!(path, vec![cell(0, 0), cell(0, 1), cell(0, 2)]);
    }

    #[test]
    fn test_blocked_cells_are_not_crossed_on_the_way_to_blocked_end() {
        let grid = Grid::from_ascii(&[".##"]).unwrap();
        assert!(find_path(&grid, cell(0, 0), cell(0, 2)).is_empty());
    }

    #[test]
    fn test_blocked_start_still_expands() {
        let grid = Grid::from_ascii(&["#.."]).unwrap();
        let path = find_path(&grid, cell(0, 0), cell(0, 2));
        assert_eq!(path, vec![cell(0, 0), cell(0, 1), cell(0, 2)]);
    }

    #[test]
    fn test_deterministic() {
        let grid = Grid::from_ascii(&["....", ".#..", "....", "..#."]).unwrap();
        let first = find_path(&grid, cell(0, 0), cell(3, 3));
        for _ in 0..10 {
            assert_eq!(find_path(&grid, cell(0, 0), cell(3, 3)), first);
        }
    }

    #[test]
    fn test_random_grids_match_distance_oracle() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let rows = rng.gen_range(1..8);
            let cols = rng.gen_range(1..8);
            let mut matrix: Vec<Vec<bool>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_bool(0.7)).collect())
                .collect();
            matrix[0][0] = true;
            let grid = super::super::grid::build_grid(&matrix).unwrap();

            let start = cell(0, 0);
            let end = cell(rng.gen_range(0..rows), rng.gen_range(0..cols));
            let path = find_path(&grid, start, end);
            let oracle = distances(&grid, start, end)[end.row][end.col];

            match oracle {
                Some(d) => {
                    assert_eq!(path.len(), d + 1);
                    assert_valid_walk(&grid, &path);
                }
                None => assert!(path.is_empty()),
            }
        }
    }
}
