//! Browse page state: `Loading -> Success | Error`, guarded by request tokens.
use crate::error::TmdbError;
use crate::models::{Movie, PaginatedMoviesResponse};

/// TMDB refuses pages beyond 500.
pub const MAX_TOTAL_PAGES: i64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub enum BrowsePhase {
    Loading,
    Success { movies: Vec<Movie>, total_pages: i64 },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseParams {
    pub language: String,
    pub page: i64,
}

/// Identifies one issued fetch; only the latest token may resolve the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone)]
pub struct BrowseState {
    params: BrowseParams,
    phase: BrowsePhase,
    generation: u64,
}

impl BrowseState {
    pub fn new(params: BrowseParams) -> (Self, RequestToken) {
        let state = Self {
            params,
            phase: BrowsePhase::Loading,
            generation: 1,
        };
        (state, RequestToken(1))
    }

    pub fn params(&self) -> &BrowseParams {
        &self.params
    }

    pub fn phase(&self) -> &BrowsePhase {
        &self.phase
    }

    /// Re-enters `Loading` for new parameters and issues a fresh token.
    pub fn change_params(&mut self, params: BrowseParams) -> RequestToken {
        self.params = params;
        self.phase = BrowsePhase::Loading;
        self.generation += 1;
        RequestToken(self.generation)
    }

    /// Applies a completed fetch. Returns false when the token is stale.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<PaginatedMoviesResponse, TmdbError>,
    ) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.phase = match result {
            Ok(data) => BrowsePhase::Success {
                total_pages: clamp_total_pages(data.total_pages),
                movies: data.results,
            },
            Err(e) => BrowsePhase::Error {
                message: e.to_string(),
            },
        };
        true
    }

    pub fn movies(&self) -> &[Movie] {
        match &self.phase {
            BrowsePhase::Success { movies, .. } => movies.as_slice(),
            _ => &[],
        }
    }

    pub fn hero(&self) -> Option<&Movie> {
        self.movies().first()
    }

    pub fn total_pages(&self) -> i64 {
        match &self.phase {
            BrowsePhase::Success { total_pages, .. } => *total_pages,
            _ => 1,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            BrowsePhase::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

pub fn clamp_total_pages(total_pages: i64) -> i64 {
    total_pages.min(MAX_TOTAL_PAGES)
}

/// Numeric coercion of the `page` query value. Zero and negatives pass through.
pub fn coerce_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}
