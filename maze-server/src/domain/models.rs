use maze_core::{GenerateError, MazeModel, RoomTypeTable};

use derive_more::From;
use thiserror::Error;
use uuid::Uuid;

/// A uniquely identifiable generated maze.
#[derive(Clone, Debug)]
pub struct Maze {
    id: Uuid,
    model: MazeModel,
}

impl Maze {
    pub fn new(id: Uuid, model: MazeModel) -> Self {
        Self { id, model }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn model(&self) -> &MazeModel {
        &self.model
    }

    pub fn into_model(self) -> MazeModel {
        self.model
    }
}

/// Largest width or height a single request may ask for.
pub const MAX_MAZE_DIMENSION: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MazeDimension(u32);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeDimensionError {
    #[error("maze dimension cannot be zero")]
    Zero,
    #[error("maze dimension {dimension} exceeds the maximum of {max}")]
    TooLarge { dimension: u32, max: u32 },
}

impl MazeDimension {
    pub fn new(raw: u32) -> Result<Self, MazeDimensionError> {
        if raw == 0 {
            return Err(MazeDimensionError::Zero);
        }

        if raw > MAX_MAZE_DIMENSION {
            return Err(MazeDimensionError::TooLarge {
                dimension: raw,
                max: MAX_MAZE_DIMENSION,
            });
        }

        Ok(Self(raw))
    }
}

/// The fields required by the domain to create a [Maze].
#[derive(Clone, Debug, PartialEq, Eq, From)]
pub struct CreateMazeRequest {
    width: MazeDimension,
    height: MazeDimension,
    room_types: RoomTypeTable,
    seed: Option<u64>,
}

impl CreateMazeRequest {
    pub fn new(
        width: MazeDimension,
        height: MazeDimension,
        room_types: RoomTypeTable,
        seed: Option<u64>,
    ) -> Self {
        Self {
            width,
            height,
            room_types,
            seed,
        }
    }

    pub fn raw_width(&self) -> u32 {
        self.width.0
    }

    pub fn raw_height(&self) -> u32 {
        self.height.0
    }

    pub fn room_types(&self) -> &RoomTypeTable {
        &self.room_types
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, Error)]
pub enum CreateMazeError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
