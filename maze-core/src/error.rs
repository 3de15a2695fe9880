use crate::types::RoomTypeId;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("maze dimensions must be greater than zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("a {width}x{height} maze does not fit in memory")]
    TooLarge { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomTypeError {
    #[error("room type table cannot be empty")]
    EmptyTable,
    #[error("room type id {0} appears more than once")]
    DuplicateId(RoomTypeId),
    #[error("unknown room type id {0}")]
    UnknownRoomType(RoomTypeId),
    #[error("at least {min} room types are required")]
    TooFewRoomTypes { min: usize },
    #[error("room type name cannot be empty")]
    EmptyName,
    #[error("room type weight {weight} exceeds the maximum of {max}")]
    WeightOutOfRange { weight: u32, max: u32 },
}
