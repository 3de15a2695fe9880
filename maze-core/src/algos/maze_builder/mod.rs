use crate::{
    error::GenerateError,
    room_types::RoomTypeTable,
    types::{Cell, MazeModel},
};

use rand::Rng;
use tracing::event;

mod carve_passages;
mod find_exits;
mod gen_grid;
mod pick_start;
mod weighted_sampler;

use weighted_sampler::WeightedSampler;

pub(crate) struct MazeBuilder {
    pub cols: u32,
    pub rows: u32,
}

impl MazeBuilder {
    pub fn new(cols: u32, rows: u32) -> Result<Self, GenerateError> {
        if cols == 0 || rows == 0 {
            return Err(GenerateError::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let fits = (cols as u64)
            .checked_mul(rows as u64)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>() as u64))
            .is_some_and(|bytes| bytes <= isize::MAX as u64);
        if !fits {
            return Err(GenerateError::TooLarge {
                width: cols,
                height: rows,
            });
        }

        Ok(MazeBuilder { cols, rows })
    }

    pub fn build<R: Rng>(&self, table: &RoomTypeTable, rng: &mut R) -> MazeModel {
        let build_start = std::time::Instant::now();

        // Edits made to the table after this point are never observed by the run
        let room_types = table.snapshot();

        let mut grid = Self::generate_grid(self.cols, self.rows, &room_types, rng);

        let grid_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Generated [{}x{}] grid in {:.2}ms",
            self.cols,
            self.rows,
            grid_time.duration_since(build_start).as_millis()
        );

        Self::carve_passages(&mut grid, rng);

        let carve_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Carved {} passages in {:.2}ms",
            grid.edge_count(),
            carve_time.duration_since(grid_time).as_millis()
        );

        let start = Self::pick_start(&mut grid, rng);
        let exits = Self::find_exits(&mut grid);

        let finish_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Built maze with start {} and {} exit/s in {:.2}ms total",
            start,
            exits.len(),
            finish_time.duration_since(build_start).as_millis()
        );

        MazeModel::new(room_types, grid, start, exits)
    }
}
