//! Image URL resolution for TMDB poster and backdrop paths.

pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/w1280";
pub const ORIGINAL_BASE: &str = "https://image.tmdb.org/t/p/original";

pub const POSTER_PLACEHOLDER: &str =
    "https://placehold.co/500x750/cccccc/333333?text=Tidak+Ada+Gambar";
pub const BACKDROP_PLACEHOLDER: &str =
    "https://placehold.co/1280x720/cccccc/333333?text=Tidak+Ada+Gambar";
pub const ORIGINAL_PLACEHOLDER: &str =
    "https://placehold.co/1920x1080/cccccc/333333?text=No+Image";

/// Hosts pages are allowed to load images from.
pub const IMAGE_HOSTS: [&str; 2] = ["https://image.tmdb.org", "https://placehold.co"];

pub fn poster_url(path: Option<&str>) -> String {
    resolve(POSTER_BASE, POSTER_PLACEHOLDER, path)
}

pub fn backdrop_url(path: Option<&str>) -> String {
    resolve(BACKDROP_BASE, BACKDROP_PLACEHOLDER, path)
}

pub fn original_backdrop_url(path: Option<&str>) -> String {
    resolve(ORIGINAL_BASE, ORIGINAL_PLACEHOLDER, path)
}

// TMDB paths carry their leading slash.
fn resolve(base: &str, placeholder: &str, path: Option<&str>) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(p) => format!("{base}{p}"),
        None => placeholder.to_string(),
    }
}
