//! Languages offered by the selector and query-string helpers around `lang`.

pub const DEFAULT_LANGUAGE: &str = "id-ID";
pub const LANG_PARAM: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Indonesian,
    English,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Indonesian, Language::English, Language::Japanese];

    pub fn code(self) -> &'static str {
        match self {
            Language::Indonesian => "id-ID",
            Language::English => "en-US",
            Language::Japanese => "ja-JP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::Indonesian => "Indonesia",
            Language::English => "English",
            Language::Japanese => "日本語",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Options for the selector. An unsupported `current` code selects nothing.
pub fn language_options(current: &str) -> Vec<LanguageOption> {
    let selected = Language::from_code(current);
    Language::ALL
        .into_iter()
        .map(|l| LanguageOption {
            code: l.code(),
            label: l.label(),
            selected: Some(l) == selected,
        })
        .collect()
}

/// Resolves the `lang` query value, falling back to the default when absent or blank.
pub fn language_or_default(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

/// Rebuilds `path?query` with `key` set to `value`, keeping other parameters in order.
pub fn with_query_param(path: &str, params: &[(String, String)], key: &str, value: &str) -> String {
    let mut replaced = false;
    let mut pairs: Vec<String> = Vec::with_capacity(params.len() + 1);
    for (k, v) in params {
        if k == key {
            if replaced {
                continue;
            }
            replaced = true;
            pairs.push(encode_pair(k, value));
        } else {
            pairs.push(encode_pair(k, v));
        }
    }
    if !replaced {
        pairs.push(encode_pair(key, value));
    }
    format!("{path}?{}", pairs.join("&"))
}

fn encode_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn closed_set_round_trips_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn options_mark_current_language() {
        let opts = language_options("en-US");
        assert_eq!(opts.len(), 3);
        assert_eq!(
            opts.iter().filter(|o| o.selected).map(|o| o.code).collect::<Vec<_>>(),
            vec!["en-US"]
        );
        assert!(language_options("de-DE").iter().all(|o| !o.selected));
    }

    #[test]
    fn blank_language_falls_back_to_default() {
        assert_eq!(language_or_default(None), "id-ID");
        assert_eq!(language_or_default(Some("")), "id-ID");
        assert_eq!(language_or_default(Some("ja-JP")), "ja-JP");
    }

    #[test]
    fn rewrites_only_the_language_parameter() {
        let p = params(&[("page", "3"), ("lang", "id-ID")]);
        assert_eq!(with_query_param("/", &p, "lang", "ja-JP"), "/?page=3&lang=ja-JP");
        let p = params(&[("page", "3")]);
        assert_eq!(with_query_param("/", &p, "lang", "en-US"), "/?page=3&lang=en-US");
    }
}
