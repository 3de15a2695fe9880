use crate::types::Direction;

// Carving scans neighbours in this order before the random pick.
pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub(crate) const MIN_ROOM_TYPES: usize = 2;
pub(crate) const MAX_ROOM_WEIGHT: u32 = 100;
pub(crate) const EXPECTED_TOTAL_WEIGHT: u32 = 100;

// Palette handed out to room types added after the built-in ones.
pub(crate) const AVAILABLE_COLORS: [&str; 12] = [
    "#ffcc99", "#ccffff", "#ffccff", "#ffffcc", "#ccffcc", "#ffcccc", "#ccccff", "#e6e6ff",
    "#ffe6e6", "#e6ffe6", "#e6e6e6", "#ffe6cc",
];
pub(crate) const AVAILABLE_SYMBOLS: [&str; 8] = ["T", "B", "M", "W", "H", "D", "P", "R"];

pub(crate) const FALLBACK_COLOR: &str = "#cccccc";
pub(crate) const FALLBACK_SYMBOL: &str = "X";

// Added room types are numbered after the four built-in ones.
pub(crate) const ROOM_NAME_ID_OFFSET: u32 = 3;

pub(crate) const CELL_SIZE: u32 = 48;
pub(crate) const MAZE_SIZE_MARGIN: u32 = 48;
pub(crate) const WALL_WIDTH: u32 = 4;
pub(crate) const MARKER_INSET: u32 = 12;

#[cfg(test)]
pub(crate) const TEST_RNG_SEED: u64 = 0x6d61_7a65;
