use std::fmt::Write;

use super::controls::pagination_nav;
use super::{escape, layout, movie_href};
use crate::browse::BrowseState;
use crate::images::{original_backdrop_url, poster_url};
use crate::models::Movie;

const OVERVIEW_PREVIEW_CHARS: usize = 50;

pub fn browse_page(state: &BrowseState) -> String {
    let language = state.params().language.as_str();
    let page = state.params().page;
    let params = vec![
        ("lang".to_string(), language.to_string()),
        ("page".to_string(), page.to_string()),
    ];

    let mut body = String::new();
    if let Some(hero) = state.hero() {
        body.push_str(&hero_banner(hero, language));
    }
    body.push_str(r#"<h1 class="section">Popular Movie</h1>"#);
    match state.error() {
        Some(message) => {
            let _ = write!(
                body,
                r#"<div class="error"><p><strong>Oops, something went wrong!</strong></p><p>{}</p><p>Make sure your TMDB_API_KEY is correct and configured in the environment.</p></div>"#,
                escape(message)
            );
        }
        None => {
            body.push_str(r#"<div class="grid">"#);
            for movie in state.movies() {
                body.push_str(&movie_card(movie, language));
            }
            body.push_str("</div>");
        }
    }
    body.push_str(&pagination_nav(page, state.total_pages(), &params[..1]));

    layout("MALIX - Popular Movies", language, &params, &body)
}

fn hero_banner(movie: &Movie, language: &str) -> String {
    let image = original_backdrop_url(
        movie
            .backdrop_path
            .as_deref()
            .or(movie.poster_path.as_deref()),
    );
    format!(
        r#"<section class="hero">
<img src="{image}" alt="{title}">
<div class="shade"></div>
<div class="body">
<h2>{title}</h2>
<p><span class="rating">&#11088; {rating:.1}</span> <span>{release}</span></p>
<p>{overview}</p>
<a class="button" href="{href}">More Info</a>
</div>
</section>"#,
        image = escape(&image),
        title = escape(&movie.title),
        rating = movie.vote_average,
        release = escape(&movie.release_date),
        overview = escape(&movie.overview),
        href = escape(&movie_href(movie.id, language)),
    )
}

fn movie_card(movie: &Movie, language: &str) -> String {
    format!(
        r#"<a class="card" href="{href}">
<img src="{poster}" alt="{title}" loading="lazy">
<div class="info">
<strong>{title}</strong>
<span>Release: {release}</span>
<span class="rating">&#11088; {rating:.1}</span>
<small>{overview}</small>
</div>
</a>"#,
        href = escape(&movie_href(movie.id, language)),
        poster = escape(&poster_url(movie.poster_path.as_deref())),
        title = escape(&movie.title),
        release = escape(&movie.release_date),
        rating = movie.vote_average,
        overview = escape(&overview_preview(&movie.overview)),
    )
}

fn overview_preview(overview: &str) -> String {
    if overview.chars().count() > OVERVIEW_PREVIEW_CHARS {
        let head: String = overview.chars().take(OVERVIEW_PREVIEW_CHARS).collect();
        format!("{head} ...")
    } else {
        overview.to_string()
    }
}
