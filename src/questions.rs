//! Question supply: the IMDb Top-250 list, cached on disk after one download.

use once_cell::sync::Lazy;
use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

const TOP_MOVIES_URL: &str = "https://tv-api.com/en/API/Top250Movies/k_zcuw1ytf";

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Execute an async HTTP request from sync context.
fn run_http_operation<F, T>(future: F) -> Result<T, reqwest::Error>
where
    F: std::future::Future<Output = Result<T, reqwest::Error>>,
{
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

fn fetch_text(url: &str) -> Result<String, reqwest::Error> {
    run_http_operation(async { HTTP.get(url).send().await?.error_for_status()?.text().await })
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    run_http_operation(async {
        let bytes = HTTP.get(url).send().await?.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    })
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read cached movie list: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed movie list: {0}")]
    Malformed(String),
    #[error("no cached movie list at {} (run once without --offline)", .0.display())]
    MissingCache(PathBuf),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// One yes/no question over a movie poster. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub text: String,
    pub image: Vec<u8>,
    pub correct_answer: bool,
}

/// Where a round's questions come from. The UI only sees this trait;
/// tests swap in a fixture implementation.
pub trait QuestionSource {
    fn load_questions(&self) -> Result<Vec<QuizQuestion>, LoadError>;

    fn question_shuffle(&self, questions: &mut [QuizQuestion]) {
        questions.shuffle(&mut rand::rng());
    }
}

#[derive(Debug, Deserialize)]
struct MostPopularMovies {
    #[serde(rename = "errorMessage", default)]
    error_message: String,
    #[serde(default)]
    items: Vec<MostPopularMovie>,
}

#[derive(Debug, Clone, Deserialize)]
struct MostPopularMovie {
    title: String,
    rating: String,
    #[serde(rename = "image")]
    image_url: String,
}

impl MostPopularMovie {
    fn rating_value(&self) -> Option<f64> {
        self.rating.trim().parse().ok()
    }
}

fn question_for(movie: &MostPopularMovie, threshold: u32, image: Vec<u8>) -> Option<QuizQuestion> {
    let rating = movie.rating_value()?;
    Some(QuizQuestion {
        text: format!(
            "Is the rating of \"{}\" higher than {}?",
            movie.title, threshold
        ),
        image,
        correct_answer: rating > threshold as f64,
    })
}

/// Network-backed source over the Top-250 list.
pub struct MovieQuestionSource {
    round_size: usize,
    offline: bool,
    cache_path: PathBuf,
}

impl MovieQuestionSource {
    pub fn new(round_size: usize, offline: bool, cache_path: PathBuf) -> Self {
        Self {
            round_size,
            offline,
            cache_path,
        }
    }

    fn movie_list(&self) -> Result<Vec<MostPopularMovie>, LoadError> {
        let text = if self.cache_path.exists() {
            fs::read_to_string(&self.cache_path)?
        } else if self.offline {
            return Err(LoadError::MissingCache(self.cache_path.clone()));
        } else {
            info!("downloading movie list from {}", TOP_MOVIES_URL);
            let text = fetch_text(TOP_MOVIES_URL)?;
            fs::write(&self.cache_path, &text)?;
            text
        };

        let movies: MostPopularMovies = serde_json::from_str(&text)?;
        if !movies.error_message.is_empty() {
            return Err(LoadError::Malformed(movies.error_message));
        }
        if movies.items.is_empty() {
            return Err(LoadError::Malformed("movie list is empty".to_string()));
        }
        Ok(movies.items)
    }

    fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        if self.offline {
            return Ok(Vec::new());
        }
        Ok(fetch_bytes(url)?)
    }
}

impl QuestionSource for MovieQuestionSource {
    fn load_questions(&self) -> Result<Vec<QuizQuestion>, LoadError> {
        let movies = self.movie_list()?;
        let rated: Vec<&MostPopularMovie> =
            movies.iter().filter(|m| m.rating_value().is_some()).collect();

        if rated.len() < self.round_size {
            return Err(LoadError::Malformed(format!(
                "only {} rated movies available, need {}",
                rated.len(),
                self.round_size
            )));
        }

        let mut rng = rand::rng();
        let mut questions = Vec::with_capacity(self.round_size);
        for movie in rated.choose_multiple(&mut rng, self.round_size) {
            let threshold = rng.random_range(5..=8);
            let image = self.fetch_poster(&movie.image_url)?;
            // `rated` only holds movies with a parsable rating.
            if let Some(question) = question_for(movie, threshold, image) {
                questions.push(question);
            }
        }

        info!("loaded {} questions", questions.len());
        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "items": [
            {"title": "The Shawshank Redemption", "rating": "9.3", "image": "https://example.com/shawshank.jpg"},
            {"title": "The Godfather", "rating": "9.2", "image": "https://example.com/godfather.jpg"},
            {"title": "Unrated Pilot", "rating": "", "image": "https://example.com/pilot.jpg"}
        ],
        "errorMessage": ""
    }"#;

    #[test]
    fn test_parse_movie_list() {
        let movies: MostPopularMovies = serde_json::from_str(SAMPLE).unwrap();
        assert!(movies.error_message.is_empty());
        assert_eq!(movies.items.len(), 3);
        assert_eq!(movies.items[0].title, "The Shawshank Redemption");
        assert_eq!(movies.items[0].rating_value(), Some(9.3));
        assert_eq!(movies.items[2].rating_value(), None);
    }

    #[test]
    fn test_question_threshold_comparison() {
        let movie = MostPopularMovie {
            title: "The Godfather".to_string(),
            rating: "9.2".to_string(),
            image_url: String::new(),
        };

        let easy = question_for(&movie, 8, Vec::new()).unwrap();
        assert!(easy.correct_answer);
        assert_eq!(easy.text, "Is the rating of \"The Godfather\" higher than 8?");

        // A threshold of 10 can never be beaten.
        let hard = question_for(&movie, 10, Vec::new()).unwrap();
        assert!(!hard.correct_answer);
    }

    #[test]
    fn test_unrated_movie_yields_no_question() {
        let movie = MostPopularMovie {
            title: "Unrated Pilot".to_string(),
            rating: "".to_string(),
            image_url: String::new(),
        };
        assert!(question_for(&movie, 6, Vec::new()).is_none());
    }

    #[test]
    fn test_offline_without_cache_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = MovieQuestionSource::new(10, true, dir.path().join("movies.json"));
        assert!(matches!(
            source.load_questions().unwrap_err(),
            LoadError::MissingCache(_)
        ));
    }

    #[test]
    fn test_offline_with_cache_loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("movies.json");
        fs::write(&cache, SAMPLE).unwrap();

        let source = MovieQuestionSource::new(2, true, cache);
        let questions = source.load_questions().unwrap();
        assert_eq!(questions.len(), 2);
        // Offline mode never fetches posters.
        assert!(questions.iter().all(|q| q.image.is_empty()));
    }

    #[test]
    fn test_round_larger_than_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("movies.json");
        fs::write(&cache, SAMPLE).unwrap();

        let source = MovieQuestionSource::new(50, true, cache);
        assert!(matches!(
            source.load_questions().unwrap_err(),
            LoadError::Malformed(_)
        ));
    }

    #[test]
    fn test_api_error_message_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("movies.json");
        fs::write(&cache, r#"{"items": [], "errorMessage": "Invalid API Key"}"#).unwrap();

        let source = MovieQuestionSource::new(10, true, cache);
        match source.load_questions().unwrap_err() {
            LoadError::Malformed(msg) => assert_eq!(msg, "Invalid API Key"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
