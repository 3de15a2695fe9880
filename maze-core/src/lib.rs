mod algos;
mod constants;
mod error;
mod room_types;
mod types;

use algos::MazeDrawer;
use tracing::{Level, span};

pub use error::{GenerateError, RoomTypeError};
pub use room_types::RoomTypeTable;
pub use types::{Cell, Connections, Direction, Grid, MazeModel, Position, RoomType, RoomTypeId};

/// Generates a `width`x`height` maze using the default random generator.
///
/// # Errors
///
/// - [GenerateError::InvalidDimensions] if either dimension is zero.
/// - [GenerateError::TooLarge] if the grid could never be allocated.
pub fn generate(
    width: u32,
    height: u32,
    table: &RoomTypeTable,
) -> Result<MazeModel, GenerateError> {
    let mut rng = algos::RngHandler::rng();
    generate_with_rng(width, height, table, &mut rng)
}

/// Same as [generate], but every run with the same `seed` and table yields
/// the same maze.
pub fn generate_seeded(
    width: u32,
    height: u32,
    table: &RoomTypeTable,
    seed: u64,
) -> Result<MazeModel, GenerateError> {
    let mut rng = algos::RngHandler::seeded(seed);
    generate_with_rng(width, height, table, &mut rng)
}

/// Generates a maze drawing every random choice from `rng`.
///
/// # Errors
///
/// - [GenerateError::InvalidDimensions] if either dimension is zero.
/// - [GenerateError::TooLarge] if the grid could never be allocated.
pub fn generate_with_rng<R: rand::Rng>(
    width: u32,
    height: u32,
    table: &RoomTypeTable,
    rng: &mut R,
) -> Result<MazeModel, GenerateError> {
    let span = span!(Level::DEBUG, "generate");
    let _guard = span.enter();

    let builder = algos::MazeBuilder::new(width, height)?;

    Ok(builder.build(table, rng))
}

/// Renders `maze` as an SVG document with coloured rooms, walls and
/// start/exit markers.
pub fn draw_svg(maze: &MazeModel) -> svg::Document {
    algos::SvgMazeDrawer::default().draw(maze)
}

/// Renders `maze` as ASCII art, one `+---+` row of walls between rows of cells.
pub fn draw_text(maze: &MazeModel) -> String {
    algos::TextMazeDrawer::default().draw(maze)
}
