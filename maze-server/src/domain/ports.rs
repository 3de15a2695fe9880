/*
   Module `ports` specifies the API by which external modules interact with the maze domain.

   All traits are bounded by `Send + Sync + 'static`, since their implementations must be shareable
   between request-handling threads.

   Trait methods are explicitly asynchronous, including `Send` bounds on response types,
   since the application is expected to always run in a multithreaded environment.
*/

use std::future::Future;

use crate::domain::models::*;

/// `MazeService` is the public API for the maze domain.
pub trait MazeService: Clone + Send + Sync + 'static {
    /// Asynchronously generate a new [Maze].
    ///
    /// # Errors
    ///
    /// - [CreateMazeError::Generate] if the maze generator rejects the request.
    fn create_maze(
        &self,
        req: &CreateMazeRequest,
    ) -> impl Future<Output = Result<Maze, CreateMazeError>> + Send;
}

/// `MazeMetrics` describes an aggregator of maze creation related metrics.
pub trait MazeMetrics: Send + Sync + Clone + 'static {
    /// Record a successful maze creation.
    fn record_maze_creation_success(&self) -> impl Future<Output = ()> + Send;

    /// Record a maze creation failure.
    fn record_maze_creation_failure(&self) -> impl Future<Output = ()> + Send;
}
