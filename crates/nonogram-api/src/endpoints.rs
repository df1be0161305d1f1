//! Endpoint paths and URL construction for the solving service
//!
//! The base URL is always passed in explicitly. Puzzle identifiers are
//! percent-encoded as a single path segment with the same character set a
//! browser's `encodeURIComponent` uses.

use nonogram_core::prelude::*;
use nonogram_core::PuzzleId;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

/// Characters left unescaped: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Path used by the swagger UI relative to the service origin.
const DOCS_PATH: &str = "/swagger-ui/index.html";

/// Which catalog listing route the service exposes.
///
/// Both routes return the same JSON array of identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEndpoint {
    /// `GET {base}/builtin/list`
    #[default]
    BuiltinList,
    /// `GET {base}/puzzles`
    Puzzles,
}

impl CatalogEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            CatalogEndpoint::BuiltinList => "/builtin/list",
            CatalogEndpoint::Puzzles => "/puzzles",
        }
    }
}

impl std::fmt::Display for CatalogEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogEndpoint::BuiltinList => write!(f, "builtin_list"),
            CatalogEndpoint::Puzzles => write!(f, "puzzles"),
        }
    }
}

impl std::str::FromStr for CatalogEndpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "builtin_list" | "builtin" => Ok(CatalogEndpoint::BuiltinList),
            "puzzles" => Ok(CatalogEndpoint::Puzzles),
            other => Err(Error::config(format!(
                "unknown catalog endpoint '{}', expected 'builtin-list' or 'puzzles'",
                other
            ))),
        }
    }
}

/// Fully resolved endpoint URLs for one service base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: Url,
    catalog: CatalogEndpoint,
}

impl ApiEndpoints {
    /// Parse and validate `base_url` (http or https, no query or fragment).
    pub fn new(base_url: &str, catalog: CatalogEndpoint) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = Url::parse(trimmed)
            .map_err(|e| Error::invalid_base_url(base_url, e.to_string()))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(
                base_url,
                format!("unsupported scheme '{}'", base.scheme()),
            ));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(Error::invalid_base_url(
                base_url,
                "query strings and fragments are not allowed",
            ));
        }

        Ok(Self { base, catalog })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn catalog_endpoint(&self) -> CatalogEndpoint {
        self.catalog
    }

    pub fn catalog_url(&self) -> Result<Url> {
        self.join(self.catalog.path())
    }

    /// `GET {base}/solve/builtin/{id}` with `id` percent-encoded.
    pub fn solve_url(&self, id: &PuzzleId) -> Result<Url> {
        let encoded = encode_id(id);
        self.join(&format!("/solve/builtin/{}", encoded))
    }

    /// Swagger UI of the service, served from the base URL's origin.
    pub fn docs_url(&self) -> String {
        format!("{}{}", self.base.origin().ascii_serialization(), DOCS_PATH)
    }

    fn join(&self, path: &str) -> Result<Url> {
        let base = self.base.as_str().trim_end_matches('/');
        let full = format!("{}{}", base, path);
        Url::parse(&full).map_err(|e| Error::invalid_base_url(full.clone(), e.to_string()))
    }
}

/// Percent-encode a puzzle id as one URL path segment.
pub fn encode_id(id: &PuzzleId) -> String {
    utf8_percent_encode(id.as_str(), ID_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ApiEndpoints {
        ApiEndpoints::new("http://localhost:8080/api", CatalogEndpoint::BuiltinList).unwrap()
    }

    #[test]
    fn test_catalog_urls() {
        assert_eq!(
            endpoints().catalog_url().unwrap().as_str(),
            "http://localhost:8080/api/builtin/list"
        );

        let puzzles = ApiEndpoints::new("http://localhost:8080/api/", CatalogEndpoint::Puzzles)
            .unwrap();
        assert_eq!(
            puzzles.catalog_url().unwrap().as_str(),
            "http://localhost:8080/api/puzzles"
        );
    }

    #[test]
    fn test_solve_url_encodes_id() {
        let url = endpoints()
            .solve_url(&PuzzleId::from("my puzzle/v2?#"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/solve/builtin/my%20puzzle%2Fv2%3F%23"
        );
    }

    #[test]
    fn test_encode_id_matches_uri_component_rules() {
        assert_eq!(encode_id(&PuzzleId::from("a-b_c.d!~*'()")), "a-b_c.d!~*'()");
        assert_eq!(encode_id(&PuzzleId::from("100%")), "100%25");
        assert_eq!(encode_id(&PuzzleId::from("кот")), "%D0%BA%D0%BE%D1%82");
    }

    #[test]
    fn test_docs_url_uses_origin() {
        assert_eq!(
            endpoints().docs_url(),
            "http://localhost:8080/swagger-ui/index.html"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(ApiEndpoints::new("not a url", CatalogEndpoint::BuiltinList).is_err());
        assert!(ApiEndpoints::new("ftp://host/api", CatalogEndpoint::BuiltinList).is_err());
        let err = ApiEndpoints::new("http://host/api?x=1", CatalogEndpoint::BuiltinList)
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_catalog_endpoint_parsing() {
        assert_eq!(
            "builtin-list".parse::<CatalogEndpoint>().unwrap(),
            CatalogEndpoint::BuiltinList
        );
        assert_eq!(
            "PUZZLES".parse::<CatalogEndpoint>().unwrap(),
            CatalogEndpoint::Puzzles
        );
        assert!("list".parse::<CatalogEndpoint>().is_err());
    }
}
