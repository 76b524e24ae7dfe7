//! OMDB metadata lookup for the display layer.
//!
//! Strictly a per-title enrichment collaborator: it runs outside the
//! indexing and query path, and every failure mode (network error,
//! non-JSON body, title unknown to OMDB) degrades to neutral `N/A`
//! placeholders instead of propagating. A broken lookup must never
//! turn a successful recommendation into an error.

use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const OMDB_URL: &str = "https://www.omdbapi.com/";

/// Metadata for one recommended title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub plot: String,
    pub poster: String,
    pub imdb_link: Option<String>,
}

impl MovieDetails {
    /// The neutral fallback shown when enrichment is unavailable.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            plot: "N/A".to_string(),
            poster: "N/A".to_string(),
            imdb_link: None,
        }
    }
}

/// Blocking OMDB client.
///
/// `client` is `None` when the HTTP client itself could not be built;
/// lookups then short-circuit to placeholders like any other failure.
pub struct OmdbClient {
    client: Option<reqwest::blocking::Client>,
    api_key: String,
}

impl OmdbClient {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| debug!(error = %e, "OMDB client unavailable"))
            .ok();
        Self { client, api_key }
    }

    /// Look up a title, degrading to placeholders on any failure.
    #[must_use]
    pub fn lookup(&self, title: &str) -> MovieDetails {
        let Some(client) = &self.client else {
            return MovieDetails::placeholder();
        };
        match self.try_lookup(client, title) {
            Ok(details) => details,
            Err(e) => {
                debug!(title, error = %e, "OMDB lookup failed");
                MovieDetails::placeholder()
            }
        }
    }

    fn try_lookup(
        &self,
        client: &reqwest::blocking::Client,
        title: &str,
    ) -> reqwest::Result<MovieDetails> {
        let body: Value = client
            .get(OMDB_URL)
            .query(&[("t", title), ("plot", "full"), ("apikey", &self.api_key)])
            .send()?
            .json()?;
        Ok(details_from_response(&body))
    }
}

/// Parse an OMDB response body into details.
///
/// OMDB signals "not found" with `"Response": "False"` in a 200 body.
fn details_from_response(body: &Value) -> MovieDetails {
    if body.get("Response").and_then(Value::as_str) != Some("True") {
        return MovieDetails::placeholder();
    }

    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string()
    };

    MovieDetails {
        plot: field("Plot"),
        poster: field("Poster"),
        imdb_link: body
            .get("imdbID")
            .and_then(Value::as_str)
            .map(|id| format!("https://www.imdb.com/title/{id}/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_successful_response() {
        let body = json!({
            "Response": "True",
            "Plot": "A thief enters dreams.",
            "Poster": "https://example.com/poster.jpg",
            "imdbID": "tt1375666"
        });
        let details = details_from_response(&body);
        assert_eq!(details.plot, "A thief enters dreams.");
        assert_eq!(
            details.imdb_link.as_deref(),
            Some("https://www.imdb.com/title/tt1375666/")
        );
    }

    #[test]
    fn test_not_found_degrades_to_placeholder() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});
        assert_eq!(details_from_response(&body), MovieDetails::placeholder());
    }

    #[test]
    fn test_unavailable_client_degrades_to_placeholder() {
        let client = OmdbClient {
            client: None,
            api_key: "key".to_string(),
        };
        assert_eq!(client.lookup("Inception"), MovieDetails::placeholder());
    }

    #[test]
    fn test_partial_response_fills_placeholders() {
        let body = json!({"Response": "True", "Plot": "Some plot"});
        let details = details_from_response(&body);
        assert_eq!(details.plot, "Some plot");
        assert_eq!(details.poster, "N/A");
        assert_eq!(details.imdb_link, None);
    }
}
