use super::{MazeDrawer, has_wall};
use crate::types::{Cell, Direction, MazeModel};

/// Draws the maze with ASCII box characters, three columns per cell.
#[derive(Debug)]
pub(crate) struct TextMazeDrawer {
    pub(crate) show_symbols: bool,
}

impl Default for TextMazeDrawer {
    fn default() -> Self {
        TextMazeDrawer { show_symbols: true }
    }
}

impl MazeDrawer for TextMazeDrawer {
    type Output = String;

    fn draw(&self, maze: &MazeModel) -> String {
        let mut lines = Vec::with_capacity(maze.height() as usize * 2 + 1);

        for row in maze.grid().rows() {
            lines.push(Self::horizontal_walls(maze, row, Direction::North));
            lines.push(self.room_line(maze, row));
        }

        if let Some(last_row) = maze.grid().rows().last() {
            lines.push(Self::horizontal_walls(maze, last_row, Direction::South));
        }

        lines.join("\n")
    }
}

impl TextMazeDrawer {
    fn horizontal_walls(maze: &MazeModel, row: &[Cell], side: Direction) -> String {
        let mut line = String::with_capacity(row.len() * 4 + 1);

        for cell in row {
            line.push('+');
            line.push_str(if has_wall(maze, cell, side) {
                "---"
            } else {
                "   "
            });
        }
        line.push('+');

        line
    }

    fn room_line(&self, maze: &MazeModel, row: &[Cell]) -> String {
        let mut line = String::with_capacity(row.len() * 4 + 1);

        for cell in row {
            line.push(if has_wall(maze, cell, Direction::West) {
                '|'
            } else {
                ' '
            });
            line.push(' ');
            line.push(self.room_char(cell));
            line.push(' ');
        }

        if let Some(last) = row.last() {
            line.push(if has_wall(maze, last, Direction::East) {
                '|'
            } else {
                ' '
            });
        }

        line
    }

    fn room_char(&self, cell: &Cell) -> char {
        if cell.is_start() {
            'S'
        } else if cell.is_exit() {
            'E'
        } else if self.show_symbols {
            cell.room_type().symbol().chars().next().unwrap_or(' ')
        } else {
            ' '
        }
    }
}
