//! Server-rendered HTML pages.
use chrono::{Datelike, Utc};

mod browse;
mod controls;
mod detail;

pub use browse::browse_page;
pub use detail::{detail_error_page, detail_not_found_page, detail_page};

const STYLES: &str = r#"
body{margin:0;background:#000;color:#f3f4f6;font-family:Inter,system-ui,sans-serif}
a{color:inherit;text-decoration:none}
header{position:absolute;top:0;left:0;right:0;z-index:50;display:flex;align-items:center;justify-content:space-between;padding:1rem 2rem}
.brand{font-size:1.875rem;font-weight:800;color:#dc2626;letter-spacing:.1em}
.nav{display:flex;gap:1.5rem;align-items:center;font-weight:700}
.nav select{background:transparent;color:#fff;font-weight:700;border:1px solid #444;border-radius:.375rem;padding:.25rem .5rem}
main{min-height:calc(100vh - 160px)}
footer{color:#9ca3af;padding:1rem;text-align:center;font-size:.875rem;margin-top:2rem}
.hero{position:relative;min-height:80vh;display:flex;align-items:flex-end;overflow:hidden;margin-bottom:1rem}
.hero img{position:absolute;inset:0;width:100%;height:100%;object-fit:cover;object-position:top;opacity:.7}
.hero .shade{position:absolute;inset:0;background:linear-gradient(to top,#000,rgba(0,0,0,.6),transparent)}
.hero .body{position:relative;padding:2rem 2rem 6rem;max-width:42rem}
.hero h2{font-size:3rem;margin:0 0 1rem}
.rating{color:#facc15;font-weight:700}
.button{display:inline-block;border:1px solid #fff;padding:.5rem 1.5rem;border-radius:.5rem;font-size:1.125rem}
.button:hover{color:#ef4444;border-color:#ef4444}
h1.section{font-size:1.5rem;padding-left:2rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:2rem;padding:0 2rem}
.card{position:relative;border-radius:1rem;overflow:hidden;aspect-ratio:2/3;transition:transform .3s}
.card:hover{transform:scale(1.05)}
.card img{width:100%;height:100%;object-fit:cover}
.card .info{position:absolute;inset:0;display:flex;flex-direction:column;justify-content:flex-end;padding:1rem;opacity:0;background:linear-gradient(to top,rgba(0,0,0,.8),transparent)}
.card:hover .info{opacity:1}
.error{color:#dc2626;text-align:center;font-size:1.25rem;margin:2rem auto;padding:1.5rem;background:#fef2f2;border:1px solid #fca5a5;border-radius:.5rem;max-width:32rem}
.notice{color:#111;text-align:center;font-size:1.25rem;margin:2rem auto;padding:1.5rem;background:#fefce8;border:1px solid #fde047;border-radius:.5rem;max-width:32rem}
.pagination{display:flex;justify-content:center;gap:.5rem;margin-top:3rem;list-style:none;padding:0}
.pagination a,.pagination span{display:block;padding:.5rem .75rem;border-radius:.375rem}
.pagination .active{border:1px solid #fff}
.pagination .disabled{pointer-events:none;opacity:.5}
.detail{position:relative;min-height:100vh}
.detail .backdrop{position:absolute;inset:0;opacity:.3;overflow:hidden}
.detail .backdrop img{width:100%;height:100%;object-fit:cover;filter:blur(4px) brightness(.75)}
.detail .content{position:relative;display:flex;flex-direction:column;align-items:center;padding-top:5rem}
.detail .row{display:flex;flex-wrap:wrap;gap:2.5rem;max-width:64rem}
.detail .poster{width:20rem;aspect-ratio:2/3;border-radius:.5rem;object-fit:cover}
.detail .tagline{font-style:italic;color:#d1d5db}
.detail .score{font-size:2.25rem;font-weight:700;color:#eab308}
.trailer{width:100%;max-width:42rem;aspect-ratio:16/9;border:0;border-radius:.5rem}
"#;

/// Wraps `body` in the shared shell. `params` are the current query parameters
/// other than `lang`; the language selector carries them over.
pub fn layout(title: &str, language: &str, params: &[(String, String)], body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="{html_lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLES}</style>
</head>
<body>
<header>
<a class="brand" href="/?lang={lang_q}">MALIX</a>
<nav class="nav">
<a href="#">Login</a>
{selector}
</nav>
</header>
<main>
{body}
</main>
<footer>
<p>&copy; {year} MALIX. Data provided by The Movie Database.</p>
</footer>
</body>
</html>
"##,
        title = escape(title),
        html_lang = escape(primary_subtag(language)),
        lang_q = urlencoding::encode(language),
        selector = controls::language_select(language, params),
        year = Utc::now().year(),
    )
}

/// `ja-JP` -> `ja`, for the document's `lang` attribute.
fn primary_subtag(language: &str) -> &str {
    language.split('-').next().unwrap_or(language)
}

pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn movie_href(id: i64, language: &str) -> String {
    format!("/movie/{id}?lang={}", urlencoding::encode(language))
}

pub(crate) fn home_href(language: &str) -> String {
    format!("/?lang={}", urlencoding::encode(language))
}
