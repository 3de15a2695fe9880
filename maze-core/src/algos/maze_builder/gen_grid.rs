use super::{MazeBuilder, WeightedSampler};
use crate::types::{Cell, Grid, Position, RoomType};

use std::sync::Arc;

use rand::Rng;
use tracing::event;

impl MazeBuilder {
    pub(super) fn generate_grid<R: Rng>(
        cols: u32,
        rows: u32,
        room_types: &[Arc<RoomType>],
        rng: &mut R,
    ) -> Grid {
        let sampler = WeightedSampler::new(room_types, |room_type| room_type.weight())
            .expect("Room type tables are never empty");

        event!(
            tracing::Level::DEBUG,
            "Sampling {} room types over a total weight of {}",
            room_types.len(),
            sampler.total()
        );

        let mut cells = Vec::with_capacity(cols as usize * rows as usize);

        for row in 0..rows {
            for col in 0..cols {
                let on_border = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                let room_type = Arc::clone(sampler.sample(rng));

                cells.push(Cell::new(Position::new(col, row), room_type, on_border));
            }
        }

        Grid::new(cols, rows, cells)
    }
}
