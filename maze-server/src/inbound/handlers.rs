use super::api::{ApiError, ApiSuccess};
use crate::domain::models::{CreateMazeRequest, Maze, MazeDimension, MazeDimensionError};
use crate::domain::ports::MazeService;
use crate::inbound::AppState;

use maze_core::{MazeModel, RoomTypeError, RoomTypeTable};

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response body data field for successful [Maze] creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMazeResponseData {
    id: String,
    maze: MazeModel,
}

impl From<Maze> for CreateMazeResponseData {
    fn from(maze: Maze) -> Self {
        Self {
            id: maze.id().to_string(),
            maze: maze.into_model(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub(super) enum ParseCreateMazeHttpRequestError {
    #[error(transparent)]
    Dimensions(#[from] MazeDimensionError),
    #[error(transparent)]
    RoomTypes(#[from] RoomTypeError),
    #[error("room type weights must total exactly 100, got {total}")]
    WeightTotal { total: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomTypeHttpRequestBody {
    name: String,
    weight: u32,
}

/// The body of a [Maze] creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateMazeHttpRequestBody {
    width: u32,
    height: u32,
    #[serde(default)]
    room_types: Option<Vec<RoomTypeHttpRequestBody>>,
    #[serde(default)]
    seed: Option<u64>,
}

impl CreateMazeHttpRequestBody {
    /// Converts the HTTP request body into a domain request.
    fn try_into_domain(self) -> Result<CreateMazeRequest, ParseCreateMazeHttpRequestError> {
        let width = MazeDimension::new(self.width)?;
        let height = MazeDimension::new(self.height)?;

        let room_types = match self.room_types {
            None => RoomTypeTable::default(),
            Some(entries) => {
                RoomTypeTable::from_weights(entries.into_iter().map(|e| (e.name, e.weight)))?
            }
        };

        if !room_types.has_expected_total() {
            return Err(ParseCreateMazeHttpRequestError::WeightTotal {
                total: room_types.total_weight(),
            });
        }

        Ok(CreateMazeRequest::new(width, height, room_types, self.seed))
    }
}

/// Create a new [Maze].
///
/// # Responses
///
/// - 201 Created: the [Maze] was successfully created.
/// - 422 Unprocessable entity: The [Maze] creation request had invalid parameters, including
///   dimensions above [crate::domain::models::MAX_MAZE_DIMENSION].
pub(super) async fn create_maze_handler<MS: MazeService>(
    State(state): State<AppState<MS>>,
    Json(body): Json<CreateMazeHttpRequestBody>,
) -> Result<ApiSuccess<CreateMazeResponseData>, ApiError> {
    let domain_req = body.try_into_domain()?;
    state
        .maze_service
        .create_maze(&domain_req)
        .await
        .map_err(ApiError::from)
        .map(|maze| ApiSuccess::new(StatusCode::CREATED, maze.into()))
}
