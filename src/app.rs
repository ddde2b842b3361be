use crate::browse::{coerce_page, BrowseParams, BrowseState};
use crate::config::Config;
use crate::detail::{load_detail, DetailOutcome};
use crate::language::language_or_default;
use crate::tmdb::{TmdbApi, TmdbClient};
use crate::views;
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::TypedHeader;
use headers::CacheControl;
use serde::Deserialize;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

const PAGE_MAX_AGE_SECS: u64 = 3600;

/// Image sources are limited to `images::IMAGE_HOSTS`; frames to YouTube embeds.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
img-src 'self' https://image.tmdb.org https://placehold.co; \
frame-src https://www.youtube.com; \
style-src 'self' 'unsafe-inline'; \
script-src 'unsafe-inline'";

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn TmdbApi>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub page: Option<String>,
}

pub async fn run_server(config: Config) -> Result<()> {
    let tmdb = TmdbClient::new(config.tmdb_api_key.clone(), config.tmdb_base_url.clone())
        .context("Failed to create TMDB client")?;
    info!("Using TMDB API at {}", config.tmdb_base_url);

    let state = AppState {
        tmdb: Arc::new(tmdb),
    };
    let app = build_router(state);

    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(browse))
        .route("/movie/:id", get(movie_detail))
        .route("/api/movie/popular", get(popular_movies))
        .route("/health", get(health))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

fn page_cache_control() -> TypedHeader<CacheControl> {
    TypedHeader(
        CacheControl::new()
            .with_public()
            .with_max_age(Duration::from_secs(PAGE_MAX_AGE_SECS)),
    )
}

async fn popular_movies(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let language = language_or_default(query.lang.as_deref());
    let page = coerce_page(query.page.as_deref());

    match state.tmdb.fetch_popular(&language, page).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => {
            error!("Popular movies request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn browse(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let params = BrowseParams {
        language: language_or_default(query.lang.as_deref()),
        page: coerce_page(query.page.as_deref()),
    };
    let (mut view, token) = BrowseState::new(params);

    let result = state
        .tmdb
        .fetch_popular(&view.params().language, view.params().page)
        .await;
    if let Err(e) = &result {
        error!("Error fetching movies: {}", e);
    }
    view.resolve(token, result);

    let html = Html(views::browse_page(&view));
    if view.error().is_some() {
        (StatusCode::INTERNAL_SERVER_ERROR, html).into_response()
    } else {
        (page_cache_control(), html).into_response()
    }
}

async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let language = language_or_default(query.lang.as_deref());

    match load_detail(state.tmdb.as_ref(), &id, &language).await {
        DetailOutcome::Found { movie, trailer } => (
            page_cache_control(),
            Html(views::detail_page(&movie, trailer.as_ref(), &language)),
        )
            .into_response(),
        DetailOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Html(views::detail_not_found_page(&language)),
        )
            .into_response(),
        DetailOutcome::Failed { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::detail_error_page(&message, &language)),
        )
            .into_response(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}
