use super::MazeBuilder;
use crate::{
    constants::DIRECTIONS,
    types::{Grid, Position},
};

use rand::Rng;
use tracing::event;

impl MazeBuilder {
    /// Carves a spanning tree over `grid` with a randomized depth-first
    /// search. The walk uses an explicit stack so its depth is bounded only by
    /// the number of cells.
    pub(super) fn carve_passages<R: Rng>(grid: &mut Grid, rng: &mut R) {
        let seed = {
            let row = rng.random_range(0..grid.height());
            let col = rng.random_range(0..grid.width());
            Position::new(col, row)
        };

        event!(tracing::Level::DEBUG, "Carving passages from {}", seed);

        let mut visited = vec![false; grid.len()];
        visited[grid.index_of(seed)] = true;

        let mut stack = Vec::with_capacity(grid.len());
        stack.push(seed);

        let mut candidates = Vec::with_capacity(DIRECTIONS.len());

        while let Some(&current) = stack.last() {
            candidates.clear();
            candidates.extend(
                grid.neighbours(current)
                    .filter(|(_, neighbour)| !visited[grid.index_of(*neighbour)]),
            );

            if candidates.is_empty() {
                // Backtrack
                stack.pop();
                continue;
            }

            let (direction, next) = candidates[rng.random_range(0..candidates.len())];

            grid.connect(current, direction);
            visited[grid.index_of(next)] = true;
            stack.push(next);
        }
    }
}
