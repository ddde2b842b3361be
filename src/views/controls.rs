use std::fmt::Write;

use super::escape;
use crate::language::{language_options, with_query_param, LANG_PARAM};
use crate::pagination::paginate;

/// GET form that rewrites `lang` and resubmits on change.
pub(super) fn language_select(current: &str, params: &[(String, String)]) -> String {
    let mut html = String::from(
        r#"<form method="get" class="language"><select name="lang" aria-label="Language" onchange="this.form.submit()">"#,
    );
    for opt in language_options(current) {
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            opt.code,
            if opt.selected { " selected" } else { "" },
            opt.label
        );
    }
    html.push_str("</select>");
    for (k, v) in params.iter().filter(|(k, _)| k != LANG_PARAM) {
        let _ = write!(
            html,
            r#"<input type="hidden" name="{}" value="{}">"#,
            escape(k),
            escape(v)
        );
    }
    html.push_str(r#"<noscript><button type="submit">Go</button></noscript></form>"#);
    html
}

pub(super) fn pagination_nav(
    current_page: i64,
    total_pages: i64,
    params: &[(String, String)],
) -> String {
    let p = paginate(current_page, total_pages);
    let href = |page: i64| escape(&with_query_param("/", params, "page", &page.to_string()));

    let mut html = String::from(r#"<nav aria-label="pagination"><ul class="pagination">"#);
    let _ = write!(
        html,
        r#"<li><a href="{}" class="{}" aria-disabled="{}">&lsaquo; Previous</a></li>"#,
        href(p.previous),
        if p.previous_disabled { "disabled" } else { "" },
        p.previous_disabled
    );
    for link in &p.pages {
        let _ = write!(
            html,
            r#"<li><a href="{}"{}>{}</a></li>"#,
            href(link.page),
            if link.active {
                r#" class="active" aria-current="page""#
            } else {
                ""
            },
            link.page
        );
    }
    if let Some(last) = p.last {
        let _ = write!(
            html,
            r#"<li><span aria-hidden="true">&hellip;</span></li><li><a href="{}">{}</a></li>"#,
            href(last),
            last
        );
    }
    let _ = write!(
        html,
        r#"<li><a href="{}" class="{}" aria-disabled="{}">Next &rsaquo;</a></li>"#,
        href(p.next),
        if p.next_disabled { "disabled" } else { "" },
        p.next_disabled
    );
    html.push_str("</ul></nav>");
    html
}
