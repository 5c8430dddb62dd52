use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie in the listings. Fixture data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub genre: String,
    pub language: String,
    pub duration: String,
    /// Decimal rating out of 10, kept as text ("8.4")
    pub rating: String,
    pub release_date: NaiveDate,
    pub votes: String,
    pub image: String,
    pub description: String,
    pub theaters: Vec<String>,
}

/// Genre chip plus free-text search, applied in that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub search: Option<String>,
}

impl MovieFilter {
    pub fn new(genre: Option<String>, search: Option<String>) -> Self {
        Self { genre, search }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(genre) = self.genre.as_deref() {
            if genre != "All" && movie.genre != genre {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                movie.title.to_lowercase().contains(&term)
                    || movie.genre.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }

    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        movies.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}
