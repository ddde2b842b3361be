use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::cache::ResponseCache;
use crate::error::TmdbError;
use crate::models::{Movie, PaginatedMoviesResponse, Video, VideoList};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3";

#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch_popular(
        &self,
        language: &str,
        page: i64,
    ) -> Result<PaginatedMoviesResponse, TmdbError>;
    async fn fetch_details(&self, id: &str, language: &str) -> Result<Movie, TmdbError>;
    async fn fetch_videos(&self, id: &str) -> Result<VideoList, TmdbError>;
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, TmdbError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TmdbError::Config);
        }
        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Arc::new(ResponseCache::default()),
        })
    }

    /// `path_and_query` never contains the credential, so it doubles as the cache key.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        context: &str,
    ) -> Result<T, TmdbError> {
        if let Some(body) = self.cache.get(path_and_query).await {
            return parse_body(&body, context);
        }

        let separator = if path_and_query.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}api_key={}",
            self.base_url,
            path_and_query,
            separator,
            urlencoding::encode(&self.api_key)
        );
        debug!("GET {}{}", self.base_url, path_and_query);

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TmdbError::Transport {
                context: context.to_string(),
                source,
            })?;
        let status = res.status();
        let text = res.text().await.map_err(|source| TmdbError::Transport {
            context: context.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = upstream_message(status, &text);
            error!("{} -> {} {}", path_and_query, status.as_u16(), message);
            return Err(TmdbError::Upstream {
                context: context.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let parsed = parse_body(&text, context)?;
        self.cache.insert(path_and_query, text).await;
        Ok(parsed)
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch_popular(
        &self,
        language: &str,
        page: i64,
    ) -> Result<PaginatedMoviesResponse, TmdbError> {
        let path = format!(
            "/movie/popular?language={}&page={page}",
            urlencoding::encode(language)
        );
        self.get_json(&path, "Failed to fetch popular movies").await
    }

    async fn fetch_details(&self, id: &str, language: &str) -> Result<Movie, TmdbError> {
        let path = format!(
            "/movie/{}?language={}",
            urlencoding::encode(id),
            urlencoding::encode(language)
        );
        self.get_json(&path, &format!("Failed to fetch movie details {id}"))
            .await
    }

    async fn fetch_videos(&self, id: &str) -> Result<VideoList, TmdbError> {
        let path = format!("/movie/{}/videos", urlencoding::encode(id));
        self.get_json(&path, &format!("Failed to fetch movie videos {id}"))
            .await
    }
}

fn parse_body<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, TmdbError> {
    serde_json::from_str(body).map_err(|source| TmdbError::Malformed {
        context: context.to_string(),
        source,
    })
}

/// Prefers TMDB's `status_message`, then the HTTP reason phrase.
fn upstream_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        status_message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.status_message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(|r| r.to_string()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// First YouTube trailer, if any.
pub fn select_trailer(videos: &VideoList) -> Option<&Video> {
    videos
        .results
        .iter()
        .find(|v| v.site == "YouTube" && v.video_type == "Trailer")
}

pub fn youtube_embed_url(video: &Video) -> String {
    format!("https://www.youtube.com/embed/{}", video.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str, kind: &str, key: &str) -> Video {
        Video {
            id: key.to_string(),
            key: key.to_string(),
            name: format!("{site} {kind}"),
            site: site.to_string(),
            video_type: kind.to_string(),
        }
    }

    #[test]
    fn only_youtube_trailers_are_selected() {
        let videos = VideoList {
            results: vec![
                video("YouTube", "Teaser", "tease"),
                video("Vimeo", "Trailer", "xyz"),
                video("YouTube", "Trailer", "abc"),
                video("YouTube", "Trailer", "later"),
            ],
        };
        let trailer = select_trailer(&videos).expect("trailer");
        assert_eq!(trailer.key, "abc");
        assert_eq!(youtube_embed_url(trailer), "https://www.youtube.com/embed/abc");
    }

    #[test]
    fn no_trailer_without_youtube_entry() {
        let videos = VideoList {
            results: vec![video("Vimeo", "Trailer", "xyz")],
        };
        assert!(select_trailer(&videos).is_none());
    }

    #[test]
    fn upstream_message_falls_back_to_reason_phrase() {
        let body = r#"{"status_code":7,"status_message":"Invalid API key","success":false}"#;
        assert_eq!(
            upstream_message(StatusCode::UNAUTHORIZED, body),
            "Invalid API key"
        );
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "Bad Gateway"
        );
        let unnamed = StatusCode::from_u16(599).expect("valid status");
        assert_eq!(upstream_message(unnamed, ""), "Unknown error");
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        assert!(matches!(
            TmdbClient::new("  ", TMDB_BASE),
            Err(TmdbError::Config)
        ));
        assert!(TmdbClient::new("key", TMDB_BASE).is_ok());
    }
}
