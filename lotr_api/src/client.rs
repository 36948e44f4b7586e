//! HTTP client for the Lord of the Rings API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::{
    query::{MovieQuery, Query, QuoteQuery},
    types::{GetResponse, Movie, Quote},
    Error,
};

/// HTTP client for the Lord of the Rings API.
///
/// Holds the base URL and bearer token captured at construction. Each call is
/// independent and stateless, so a shared client can serve concurrent
/// requests without coordination. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout.
pub struct Client {
    base_url: String,
    auth_token: Option<String>,
}

impl Client {
    /// Creates a new client for the given API base URL and bearer token.
    ///
    /// Both are validated eagerly: an empty base URL or token is a
    /// construction-time error, not a deferred per-call one.
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Result<Self, Error> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(Error::MissingBaseUrl);
        }
        let auth_token = auth_token.into();
        if auth_token.is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(Self {
            base_url,
            auth_token: Some(auth_token),
        })
    }

    /// Discards the bearer token. Subsequent calls fail with
    /// [`Error::AuthenticationRequired`].
    pub fn clear_token(&mut self) {
        self.auth_token = None;
    }

    fn auth_header(&self) -> Result<String, Error> {
        match &self.auth_token {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err(Error::AuthenticationRequired),
        }
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        // The token is re-checked per call; it may have been cleared since
        // construction.
        let auth = self.auth_header()?;
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let resp = client
            .get(&url)
            .header("Authorization", auth)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(Error::RequestFailed(status_text));
        }

        let body = resp.text().await?;
        let parsed = serde_json::from_str::<T>(&body)?;
        Ok(parsed)
    }

    /// Fetches the list of movies, optionally narrowed by a filter query.
    pub async fn get_movies(
        &self,
        query: Option<&MovieQuery>,
    ) -> Result<GetResponse<Movie>, Error> {
        let path = match query {
            Some(query) => query.to_path("movie"),
            None => "movie".to_string(),
        };
        self.get::<GetResponse<Movie>>(&path).await
    }

    /// Fetches a single movie by its record ID.
    pub async fn get_movie(&self, id: &str) -> Result<GetResponse<Movie>, Error> {
        self.get::<GetResponse<Movie>>(&format!("movie/{}", id))
            .await
    }

    /// Fetches all quotes spoken in the given movie.
    pub async fn get_movie_quotes(&self, movie_id: &str) -> Result<GetResponse<Quote>, Error> {
        self.get::<GetResponse<Quote>>(&format!("movie/{}/quote", movie_id))
            .await
    }

    /// Fetches the list of quotes, optionally narrowed by a filter query.
    pub async fn get_quotes(
        &self,
        query: Option<&QuoteQuery>,
    ) -> Result<GetResponse<Quote>, Error> {
        let path = match query {
            Some(query) => query.to_path("quote"),
            None => "quote".to_string(),
        };
        self.get::<GetResponse<Quote>>(&path).await
    }

    /// Fetches a single quote by its record ID.
    pub async fn get_quote(&self, id: &str) -> Result<GetResponse<Quote>, Error> {
        self.get::<GetResponse<Quote>>(&format!("quote/{}", id))
            .await
    }
}
