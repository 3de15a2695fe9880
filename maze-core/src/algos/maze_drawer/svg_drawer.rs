use super::{DrawConfig, MazeDrawer, has_wall};
use crate::{
    constants::DIRECTIONS,
    types::{Cell, Direction, MazeModel},
};

use svg::{
    Document,
    node::element::{Path, Rectangle, path::Data},
};

const WALL_COLOR: &str = "#2c3e50";
const START_COLOR: &str = "#2ecc71";
const EXIT_COLOR: &str = "#e74c3c";

#[derive(Debug, Default)]
pub(crate) struct SvgMazeDrawer {
    pub(crate) config: DrawConfig,
}

impl MazeDrawer for SvgMazeDrawer {
    type Output = Document;

    fn draw(&self, maze: &MazeModel) -> Document {
        let config = &self.config;

        let canvas_width = maze.width() * config.cell_size + config.margin;
        let canvas_height = maze.height() * config.cell_size + config.margin;

        let mut document = Document::new()
            .set("width", canvas_width)
            .set("height", canvas_height)
            .set("viewBox", (0, 0, canvas_width, canvas_height));

        for room in maze.grid().cells().iter().map(|cell| self.draw_room(cell)) {
            document = document.add(room);
        }

        // Markers go on top of the room fill but below the walls
        for cell in maze.grid().cells() {
            if cell.is_start() {
                document = document.add(self.draw_marker(cell, START_COLOR));
            } else if cell.is_exit() {
                document = document.add(self.draw_marker(cell, EXIT_COLOR));
            }
        }

        document.add(self.draw_walls(maze))
    }
}

impl SvgMazeDrawer {
    fn cell_origin(&self, cell: &Cell) -> (u32, u32) {
        let offset = self.config.margin / 2;
        let position = cell.position();

        (
            offset + position.col * self.config.cell_size,
            offset + position.row * self.config.cell_size,
        )
    }

    fn draw_room(&self, cell: &Cell) -> Rectangle {
        let (x, y) = self.cell_origin(cell);

        Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", self.config.cell_size)
            .set("height", self.config.cell_size)
            .set("fill", cell.room_type().color())
    }

    fn draw_marker(&self, cell: &Cell, color: &str) -> Rectangle {
        let (x, y) = self.cell_origin(cell);
        let inset = self.config.marker_inset;
        let size = self.config.cell_size.saturating_sub(inset * 2);

        Rectangle::new()
            .set("x", x + inset)
            .set("y", y + inset)
            .set("width", size)
            .set("height", size)
            .set("fill", color)
    }

    fn draw_walls(&self, maze: &MazeModel) -> Path {
        let size = self.config.cell_size;
        let mut data = Data::new();

        for cell in maze.grid().cells() {
            let (x, y) = self.cell_origin(cell);
            let on_grid_edge = |direction: Direction| {
                direction
                    .step_from(cell.position(), maze.width(), maze.height())
                    .is_none()
            };

            for direction in DIRECTIONS {
                // Shared walls are drawn once, from the cell below or to the right
                let owns_side = matches!(direction, Direction::North | Direction::West)
                    || on_grid_edge(direction);

                if !owns_side || !has_wall(maze, cell, direction) {
                    continue;
                }

                let (from, to) = match direction {
                    Direction::North => ((x, y), (x + size, y)),
                    Direction::East => ((x + size, y), (x + size, y + size)),
                    Direction::South => ((x, y + size), (x + size, y + size)),
                    Direction::West => ((x, y), (x, y + size)),
                };

                data = data.move_to::<(u32, u32)>(from);
                data = data.line_to::<(u32, u32)>(to);
            }
        }

        Path::new()
            .set("fill", "none")
            .set("stroke", WALL_COLOR)
            .set("stroke-width", self.config.wall_width)
            .set("stroke-linecap", "square")
            .set("d", data)
    }
}
