use super::MazeBuilder;
use crate::types::{Grid, Position};

use tracing::event;

impl MazeBuilder {
    /// Flags every border dead end other than the start as an exit, scanning
    /// rows top to bottom. Returns the exits in scan order.
    pub(super) fn find_exits(grid: &mut Grid) -> Vec<Position> {
        let mut exits = Vec::new();

        for cell in grid.cells_mut() {
            cell.is_exit = cell.on_border && cell.is_dead_end() && !cell.is_start;

            if cell.is_exit {
                exits.push(cell.position);
            }
        }

        event!(tracing::Level::DEBUG, "Found {} exit/s", exits.len());

        exits
    }
}
