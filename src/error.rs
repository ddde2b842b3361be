use reqwest::StatusCode;

/// Failures raised by the TMDB client.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("TMDB_API_KEY is not configured. Add it to the environment or .env file.")]
    Config,

    #[error("{context}: {status} - {message}")]
    Upstream {
        context: String,
        status: u16,
        message: String,
    },

    #[error("{context}: invalid response body ({source})")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{context}: request failed ({source})")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TmdbError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_embeds_status_and_reason() {
        let err = TmdbError::Upstream {
            context: "Failed to fetch popular movies".to_string(),
            status: 401,
            message: "Invalid API key: You must be granted a valid key.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch popular movies: 401 - Invalid API key: You must be granted a valid key."
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn only_upstream_404_counts_as_not_found() {
        let missing = TmdbError::Upstream {
            context: "Failed to fetch movie details 9".to_string(),
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!TmdbError::Config.is_not_found());
    }
}
