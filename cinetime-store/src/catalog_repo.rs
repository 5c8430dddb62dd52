use async_trait::async_trait;
use cinetime_catalog::{fixtures, LiveEvent, Movie, Showtime};
use cinetime_core::{CatalogError, CatalogSource};
use std::time::Duration;
use tokio::sync::RwLock;

/// Catalog served from memory. Every movie shares the same showtimes.
pub struct InMemoryCatalog {
    movies: RwLock<Vec<Movie>>,
    showtimes: RwLock<Vec<Showtime>>,
    events: RwLock<Vec<LiveEvent>>,
    latency: Duration,
}

impl InMemoryCatalog {
    pub fn new(movies: Vec<Movie>, showtimes: Vec<Showtime>, events: Vec<LiveEvent>, latency: Duration) -> Self {
        Self {
            movies: RwLock::new(movies),
            showtimes: RwLock::new(showtimes),
            events: RwLock::new(events),
            latency,
        }
    }

    pub fn with_fixtures(latency: Duration) -> Self {
        Self::new(fixtures::movies(), fixtures::showtimes(), fixtures::live_events(), latency)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.movies.read().await.clone())
    }

    async fn get_movie(&self, movie_id: u32) -> Result<Movie, CatalogError> {
        self.movies
            .read()
            .await
            .iter()
            .find(|m| m.id == movie_id)
            .cloned()
            .ok_or(CatalogError::MovieNotFound(movie_id))
    }

    async fn list_showtimes(&self, movie_id: u32) -> Result<Vec<Showtime>, CatalogError> {
        self.get_movie(movie_id).await?;
        self.simulate_latency().await;
        Ok(self.showtimes.read().await.clone())
    }

    async fn list_events(&self) -> Result<Vec<LiveEvent>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.events.read().await.clone())
    }

    async fn get_event(&self, event_id: u32) -> Result<LiveEvent, CatalogError> {
        self.events
            .read()
            .await
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or(CatalogError::EventNotFound(event_id))
    }
}
