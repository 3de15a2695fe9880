/*!
   Module `service` provides the canonical implementation of the [MazeService] port.
*/

use maze_core::{generate, generate_seeded};

use super::{
    models::{CreateMazeError, CreateMazeRequest, Maze},
    ports::{MazeMetrics, MazeService},
};

use uuid::Uuid;

/// Canonical implementation of the [MazeService] port, through which the maze domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<M>
where
    M: MazeMetrics,
{
    metrics: M,
}

impl<M> Service<M>
where
    M: MazeMetrics,
{
    pub fn new(metrics: M) -> Self {
        Self { metrics }
    }
}

impl<M> MazeService for Service<M>
where
    M: MazeMetrics,
{
    /// Generate the [Maze] specified in `req` and record the outcome.
    ///
    /// # Errors
    ///
    /// - Propagates any [maze_core::GenerateError] as [CreateMazeError::Generate].
    async fn create_maze(&self, req: &CreateMazeRequest) -> Result<Maze, CreateMazeError> {
        let generated = match req.seed() {
            Some(seed) => {
                generate_seeded(req.raw_width(), req.raw_height(), req.room_types(), seed)
            }
            None => generate(req.raw_width(), req.raw_height(), req.room_types()),
        };

        let result = generated
            .map(|model| Maze::new(Uuid::new_v4(), model))
            .map_err(CreateMazeError::from);

        match result {
            Ok(ref maze) => {
                tracing::info!(
                    "Created maze {} with {} exit/s",
                    maze.id(),
                    maze.model().exits().len()
                );
                self.metrics.record_maze_creation_success().await;
            }
            Err(ref e) => {
                tracing::warn!("Failed to create maze: {}", e);
                self.metrics.record_maze_creation_failure().await;
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{domain::models::MazeDimension, outbound::metrics::CountingMetrics};

    use maze_core::RoomTypeTable;

    fn request(width: u32, height: u32, seed: Option<u64>) -> CreateMazeRequest {
        CreateMazeRequest::new(
            MazeDimension::new(width).unwrap(),
            MazeDimension::new(height).unwrap(),
            RoomTypeTable::default(),
            seed,
        )
    }

    #[tokio::test]
    async fn test_create_maze_records_success() {
        let metrics = CountingMetrics::default();
        let service = Service::new(metrics.clone());

        let maze = service.create_maze(&request(6, 4, None)).await.unwrap();

        assert_eq!(maze.model().width(), 6);
        assert_eq!(maze.model().height(), 4);
        assert_eq!(metrics.successes(), 1);
        assert_eq!(metrics.failures(), 0);
    }

    #[tokio::test]
    async fn test_create_maze_with_seed_is_reproducible() {
        let service = Service::new(CountingMetrics::default());

        let first = service.create_maze(&request(8, 8, Some(3))).await.unwrap();
        let second = service.create_maze(&request(8, 8, Some(3))).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.model().start(), second.model().start());
        assert_eq!(first.model().exits(), second.model().exits());
    }
}
