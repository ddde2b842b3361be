use tracing::{error, warn};

use crate::models::{Movie, Video};
use crate::tmdb::{select_trailer, TmdbApi};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found {
        movie: Movie,
        trailer: Option<Video>,
    },
    NotFound,
    Failed {
        message: String,
    },
}

/// Fetches details and videos concurrently. A videos failure only drops the trailer.
pub async fn load_detail(tmdb: &dyn TmdbApi, id: &str, language: &str) -> DetailOutcome {
    let (details, videos) = tokio::join!(tmdb.fetch_details(id, language), tmdb.fetch_videos(id));

    let movie = match details {
        Ok(movie) => movie,
        Err(e) if e.is_not_found() => {
            warn!("Movie {} not found upstream", id);
            return DetailOutcome::NotFound;
        }
        Err(e) => {
            error!("Error fetching movie details: {}", e);
            return DetailOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    let trailer = match videos {
        Ok(list) => select_trailer(&list).cloned(),
        Err(e) => {
            warn!("Rendering movie {} without trailer: {}", id, e);
            None
        }
    };

    DetailOutcome::Found { movie, trailer }
}
