use super::MazeBuilder;
use crate::types::{Grid, Position};

use rand::Rng;
use tracing::event;

impl MazeBuilder {
    /// Marks a uniformly random cell as the start. The pick ignores the
    /// carved passages and the cell the carving started from.
    pub(super) fn pick_start<R: Rng>(grid: &mut Grid, rng: &mut R) -> Position {
        let row = rng.random_range(0..grid.height());
        let col = rng.random_range(0..grid.width());
        let start = Position::new(col, row);

        for cell in grid.cells_mut() {
            cell.is_start = cell.position == start;
        }

        event!(tracing::Level::DEBUG, "Start at {}", start);

        start
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::room_types::RoomTypeTable;

    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_pick_start_marks_exactly_one_cell() {
        let room_types = RoomTypeTable::default().snapshot();
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = MazeBuilder::generate_grid(4, 9, &room_types, &mut rng);

        for _ in 0..10 {
            let start = MazeBuilder::pick_start(&mut grid, &mut rng);

            let starts = grid
                .cells()
                .iter()
                .filter(|cell| cell.is_start())
                .map(|cell| cell.position())
                .collect::<Vec<_>>();
            assert_eq!(starts, vec![start]);
            assert!(grid.contains(start));
        }
    }

    #[test]
    fn test_pick_start_reaches_every_cell() {
        let room_types = RoomTypeTable::default().snapshot();
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = MazeBuilder::generate_grid(3, 2, &room_types, &mut rng);

        let picked = (0..500)
            .map(|_| MazeBuilder::pick_start(&mut grid, &mut rng))
            .collect::<HashSet<_>>();

        assert_eq!(picked.len(), 6);
    }
}
