use crate::constants::DIRECTIONS;

use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub col: u32,
    pub row: u32,
}

impl Position {
    pub const fn new(col: u32, row: u32) -> Self {
        Position { col, row }
    }

    pub fn distance(&self, other: &Position) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Row and column offsets of a single step, rows growing southwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The position one step away from `from`, if it lies inside a
    /// `width`x`height` grid.
    pub fn step_from(&self, from: Position, width: u32, height: u32) -> Option<Position> {
        let (row_delta, col_delta) = self.delta();

        let row = from.row.checked_add_signed(row_delta)?;
        let col = from.col.checked_add_signed(col_delta)?;

        if row < height && col < width {
            Some(Position::new(col, row))
        } else {
            None
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RoomTypeId(pub u32);

impl Display for RoomTypeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RoomType {
    id: RoomTypeId,
    name: String,
    weight: u32,
    color: String,
    symbol: String,
}

impl RoomType {
    pub fn new(
        id: RoomTypeId,
        name: impl Into<String>,
        weight: u32,
        color: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        RoomType {
            id,
            name: name.into(),
            weight,
            color: color.into(),
            symbol: symbol.into(),
        }
    }

    pub fn id(&self) -> RoomTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] ({})", self.name, self.id, self.weight)
    }
}

/// Directions a cell is carved open towards, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Connections(Vec<Direction>);

impl Connections {
    pub fn new() -> Self {
        Connections(Vec::with_capacity(DIRECTIONS.len()))
    }

    /// Returns `false` if the direction was already present.
    pub fn insert(&mut self, direction: Direction) -> bool {
        if self.contains(direction) {
            return false;
        }

        self.0.push(direction);
        true
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0.contains(&direction)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.0.iter().copied()
    }
}

fn serialize_room_type_id<S: Serializer>(
    room_type: &Arc<RoomType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    room_type.id().serialize(serializer)
}

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub(crate) position: Position,
    #[serde(serialize_with = "serialize_room_type_id")]
    pub(crate) room_type: Arc<RoomType>,
    pub(crate) connections: Connections,
    pub(crate) is_start: bool,
    pub(crate) is_exit: bool,
    pub(crate) on_border: bool,
}

impl Cell {
    pub(crate) fn new(position: Position, room_type: Arc<RoomType>, on_border: bool) -> Self {
        Cell {
            position,
            room_type,
            connections: Connections::new(),
            is_start: false,
            is_exit: false,
            on_border,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn room_type(&self) -> &RoomType {
        &self.room_type
    }

    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn is_connected(&self, direction: Direction) -> bool {
        self.connections.contains(direction)
    }

    pub fn is_start(&self) -> bool {
        self.is_start
    }

    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    pub fn on_border(&self) -> bool {
        self.on_border
    }

    pub fn is_dead_end(&self) -> bool {
        self.connections.len() == 1
    }
}

/// Row-major storage of the maze cells.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn new(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);

        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.col < self.width && position.row < self.height
    }

    pub(crate) fn index_of(&self, position: Position) -> usize {
        position.row as usize * self.width as usize + position.col as usize
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        if self.contains(position) {
            Some(&self.cells[self.index_of(position)])
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if self.contains(position) {
            let idx = self.index_of(position);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// In-bounds neighbours of `position`, in [`DIRECTIONS`] order.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> {
        let (width, height) = (self.width, self.height);

        DIRECTIONS.into_iter().filter_map(move |direction| {
            direction
                .step_from(position, width, height)
                .map(|neighbour| (direction, neighbour))
        })
    }

    /// Records a passage between `from` and its neighbour towards `direction`
    /// on both cells. Returns the neighbour position.
    pub(crate) fn connect(&mut self, from: Position, direction: Direction) -> Option<Position> {
        let to = direction.step_from(from, self.width, self.height)?;

        self.get_mut(from)?.connections.insert(direction);
        self.get_mut(to)?.connections.insert(direction.reverse());

        Some(to)
    }

    /// Number of undirected passages in the grid.
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.connections.len())
            .sum::<usize>()
            / 2
    }
}

/// The result of a generation run. Read-only once returned.
#[derive(Debug, Clone, Serialize)]
pub struct MazeModel {
    width: u32,
    height: u32,
    room_types: Vec<Arc<RoomType>>,
    grid: Grid,
    start: Position,
    exits: Vec<Position>,
}

impl MazeModel {
    pub(crate) fn new(
        room_types: Vec<Arc<RoomType>>,
        grid: Grid,
        start: Position,
        exits: Vec<Position>,
    ) -> Self {
        MazeModel {
            width: grid.width(),
            height: grid.height(),
            room_types,
            grid,
            start,
            exits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The room-type table as it was when the maze was generated.
    pub fn room_types(&self) -> impl Iterator<Item = &RoomType> {
        self.room_types.iter().map(|room_type| room_type.as_ref())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.get(position)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exits(&self) -> &[Position] {
        &self.exits
    }
}
