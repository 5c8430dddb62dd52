use async_trait::async_trait;
use cinetime_catalog::{LiveEvent, Movie, Showtime};

/// Where listings come from. The only implementation today serves the
/// built-in fixtures; a remote catalog would slot in here.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    async fn get_movie(&self, movie_id: u32) -> Result<Movie, CatalogError>;

    /// Showtimes for a movie. Unknown movie ids are an error.
    async fn list_showtimes(&self, movie_id: u32) -> Result<Vec<Showtime>, CatalogError>;

    async fn list_events(&self) -> Result<Vec<LiveEvent>, CatalogError>;

    async fn get_event(&self, event_id: u32) -> Result<LiveEvent, CatalogError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Movie not found: {0}")]
    MovieNotFound(u32),

    #[error("Event not found: {0}")]
    EventNotFound(u32),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}
