//! Solving service client
//!
//! [`PuzzleApi`] is the seam the app layer talks to. [`HttpPuzzleApi`] is the
//! production implementation over reqwest; tests substitute the doubles in
//! [`crate::test_utils`].

use std::time::Duration;

use nonogram_core::prelude::*;
use nonogram_core::{PuzzleCatalog, PuzzleId, SolutionGrid};
use reqwest::StatusCode;
use url::Url;

use crate::endpoints::{ApiEndpoints, CatalogEndpoint};
use crate::protocol;

/// Default transport timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the viewer needs from the solving service.
#[trait_variant::make(PuzzleApi: Send)]
pub trait LocalPuzzleApi {
    /// Fetch the list of built-in puzzle identifiers.
    async fn fetch_catalog(&self) -> Result<PuzzleCatalog>;

    /// Ask the service to solve a built-in puzzle.
    async fn solve_builtin(&self, id: &PuzzleId) -> Result<SolutionGrid>;
}

/// Connection settings for [`HttpPuzzleApi`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub catalog_endpoint: CatalogEndpoint,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            catalog_endpoint: CatalogEndpoint::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_catalog_endpoint(mut self, endpoint: CatalogEndpoint) -> Self {
        self.catalog_endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of [`PuzzleApi`].
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpPuzzleApi {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
    timeout: Duration,
}

impl HttpPuzzleApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let endpoints = ApiEndpoints::new(&config.base_url, config.catalog_endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("nonogram-viewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints,
            timeout: config.timeout,
        })
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// GET `url`, returning the body of a successful response.
    ///
    /// `failure_prefix` names the operation in non-success status messages,
    /// e.g. `"Solve failed"` → `"Solve failed: 404"`.
    async fn get_body(&self, url: Url, failure_prefix: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            // The status wins even if the body cannot be read
            let body = response.bytes().await.unwrap_or_default();
            let message = status_message(failure_prefix, status, &body);
            warn!("GET {} -> {}", url, message);
            return Err(Error::http_status(status.as_u16(), message));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&e))?;
        Ok(body.to_vec())
    }

    fn transport_error(&self, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::network(format!(
                "request timed out after {} ms",
                self.timeout.as_millis()
            ))
        } else if err.is_connect() {
            Error::network(format!("could not connect to solver service: {}", err))
        } else {
            Error::network(err.to_string())
        }
    }
}

impl PuzzleApi for HttpPuzzleApi {
    async fn fetch_catalog(&self) -> Result<PuzzleCatalog> {
        let url = self.endpoints.catalog_url()?;
        let body = self.get_body(url, "Failed to load list").await?;
        let catalog = protocol::parse_catalog(&body)?;
        info!("Loaded {} puzzle identifiers", catalog.len());
        Ok(catalog)
    }

    async fn solve_builtin(&self, id: &PuzzleId) -> Result<SolutionGrid> {
        let url = self.endpoints.solve_url(id)?;
        let body = self.get_body(url, "Solve failed").await?;
        let grid = protocol::parse_solution(&body)?;
        info!(
            "Solved '{}' ({}x{})",
            id,
            grid.height(),
            grid.width()
        );
        Ok(grid)
    }
}

/// `"{prefix}: {code}"`, extended with the problem summary when the body is
/// a problem document.
fn status_message(prefix: &str, status: StatusCode, body: &[u8]) -> String {
    match protocol::parse_problem(body) {
        Some(summary) => format!("{}: {} ({})", prefix, status.as_u16(), summary),
        None => format!("{}: {}", prefix, status.as_u16()),
    }
}
