use crate::{
    constants::{CELL_SIZE, MARKER_INSET, MAZE_SIZE_MARGIN, WALL_WIDTH},
    types::{Cell, Direction, MazeModel},
};

mod svg_drawer;
mod text_drawer;

pub(crate) use svg_drawer::SvgMazeDrawer;
pub(crate) use text_drawer::TextMazeDrawer;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawConfig {
    pub(crate) cell_size: u32,
    pub(crate) margin: u32,
    pub(crate) wall_width: u32,
    pub(crate) marker_inset: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            cell_size: CELL_SIZE,
            margin: MAZE_SIZE_MARGIN,
            wall_width: WALL_WIDTH,
            marker_inset: MARKER_INSET,
        }
    }
}

pub(crate) trait MazeDrawer {
    type Output;

    fn draw(&self, maze: &MazeModel) -> Self::Output;
}

/// Whether a wall separates `cell` from whatever lies towards `direction`.
/// Outer walls of an exit are left open so the way out is visible.
fn has_wall(maze: &MazeModel, cell: &Cell, direction: Direction) -> bool {
    if cell.is_connected(direction) {
        return false;
    }

    let leaves_grid = direction
        .step_from(cell.position(), maze.width(), maze.height())
        .is_none();

    !(leaves_grid && cell.is_exit())
}
