use std::fmt::Write;

use super::{escape, home_href, layout};
use crate::images::{backdrop_url, poster_url};
use crate::models::{Movie, Video};
use crate::tmdb::youtube_embed_url;

pub fn detail_page(movie: &Movie, trailer: Option<&Video>, language: &str) -> String {
    let mut meta = String::new();
    if let Some(tagline) = movie.tagline.as_deref().filter(|t| !t.is_empty()) {
        let _ = write!(meta, r#"<p class="tagline">&quot;{}&quot;</p>"#, escape(tagline));
    }
    let _ = write!(
        meta,
        "<p><strong>Release:</strong> {}</p>",
        escape(&movie.release_date)
    );
    if let Some(runtime) = movie.runtime.filter(|r| *r > 0) {
        let _ = write!(meta, "<p><strong>Duration:</strong> {runtime} minutes</p>");
    }
    if !movie.genres.is_empty() {
        let genres = movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(meta, "<p><strong>Genre:</strong> {}</p>", escape(&genres));
    }

    let synopsis = if movie.overview.trim().is_empty() {
        "No synopsis is available for this movie."
    } else {
        movie.overview.as_str()
    };

    let trailer_html = match trailer {
        Some(video) => format!(
            r#"<iframe class="trailer" src="{}" title="{}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
            escape(&youtube_embed_url(video)),
            escape(&video.name)
        ),
        None => "<p>This movie has no trailer.</p>".to_string(),
    };

    let body = format!(
        r#"<div class="detail">
<div class="backdrop"><img src="{backdrop}" alt="Backdrop {title}"></div>
<div class="content">
<div class="row">
<img class="poster" src="{poster}" alt="{title}">
<div>
<h1>{title}</h1>
{meta}
<p><span class="score">{rating:.1}</span> / 10</p>
<h2>Synopsis</h2>
<p>{synopsis}</p>
</div>
</div>
<section>
<h2>Trailer</h2>
{trailer_html}
</section>
<a class="button" href="{home}">Back to Home</a>
</div>
</div>"#,
        backdrop = escape(&backdrop_url(movie.backdrop_path.as_deref())),
        poster = escape(&poster_url(movie.poster_path.as_deref())),
        title = escape(&movie.title),
        rating = movie.vote_average,
        synopsis = escape(synopsis),
        home = escape(&home_href(language)),
    );

    layout(&format!("MALIX - {}", movie.title), language, &[], &body)
}

pub fn detail_error_page(message: &str, language: &str) -> String {
    let body = format!(
        r#"<div class="error"><p><strong>Failed to load movie details!</strong></p><p>{}</p><a class="button" href="{}">Back to Home</a></div>"#,
        escape(message),
        escape(&home_href(language))
    );
    layout("MALIX - Error", language, &[], &body)
}

pub fn detail_not_found_page(language: &str) -> String {
    let body = format!(
        r#"<div class="notice"><p><strong>Movie not found.</strong></p><a class="button" href="{}">Back to Home</a></div>"#,
        escape(&home_href(language))
    );
    layout("MALIX - Not found", language, &[], &body)
}
