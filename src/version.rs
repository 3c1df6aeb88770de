//! API version negotiation.
//!
//! # Design
//! Two versions exist: 1.0 (deprecated) and 1.1 (current). The client
//! selects one via the `X-Version` request header; an absent header means
//! the default, 1.0. Each route declares the versions it serves in a static
//! table keyed by method and matched path, and the middleware rejects a
//! request whose negotiated version the matched route does not declare.
//! Every negotiated response reports the supported and deprecated version
//! lists in dedicated headers.

use std::fmt;

use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Request header naming the desired API version.
pub const VERSION_HEADER: &str = "x-version";

pub const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";
pub const DEPRECATED_VERSIONS_HEADER: &str = "api-deprecated-versions";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1_0,
    V1_1,
}

impl ApiVersion {
    /// Assumed when the request carries no version header.
    pub const DEFAULT: ApiVersion = ApiVersion::V1_0;

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1.0" => Some(ApiVersion::V1_0),
            "1.1" => Some(ApiVersion::V1_1),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1_0 => "1.0",
            ApiVersion::V1_1 => "1.1",
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(self, ApiVersion::V1_0)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BOTH: &[ApiVersion] = &[ApiVersion::V1_0, ApiVersion::V1_1];

/// Declared version set per route: (method, matched path, versions).
pub const ROUTE_VERSIONS: &[(&str, &str, &[ApiVersion])] = &[
    ("GET", "/todoitems", BOTH),
    ("POST", "/todoitems", BOTH),
    ("GET", "/todoitems/complete", BOTH),
    ("GET", "/todoitems/{id}", BOTH),
    ("PUT", "/todoitems/{id}", BOTH),
    ("DELETE", "/todoitems/{id}", BOTH),
];

fn declared_versions(method: &str, path: &str) -> Option<&'static [ApiVersion]> {
    ROUTE_VERSIONS
        .iter()
        .find(|(m, p, _)| *m == method && *p == path)
        .map(|(_, _, versions)| *versions)
}

/// Middleware that resolves the requested version, validates it against the
/// matched route's declared set, stashes it in request extensions, and
/// stamps the version report headers on the response.
pub async fn negotiate(mut req: Request, next: Next) -> Response {
    let requested = match req.headers().get(VERSION_HEADER) {
        None => ApiVersion::DEFAULT,
        Some(value) => {
            let raw = value.to_str().unwrap_or("");
            match ApiVersion::parse(raw) {
                Some(version) => version,
                None => {
                    return (
                        StatusCode::BAD_REQUEST,
                        format!("unsupported API version '{raw}'"),
                    )
                        .into_response();
                }
            }
        }
    };

    if let Some(matched) = req.extensions().get::<MatchedPath>() {
        let declared = declared_versions(req.method().as_str(), matched.as_str());
        if !declared.is_some_and(|versions| versions.contains(&requested)) {
            return (
                StatusCode::BAD_REQUEST,
                format!("API version {requested} is not declared for this route"),
            )
                .into_response();
        }
    }

    if requested.is_deprecated() {
        tracing::debug!(version = %requested, "deprecated API version requested");
    }

    req.extensions_mut().insert(requested);
    let mut response = next.run(req).await;
    response.headers_mut().insert(
        SUPPORTED_VERSIONS_HEADER,
        HeaderValue::from_static(ApiVersion::V1_1.as_str()),
    );
    response.headers_mut().insert(
        DEPRECATED_VERSIONS_HEADER,
        HeaderValue::from_static(ApiVersion::V1_0.as_str()),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_versions() {
        assert_eq!(ApiVersion::parse("1.0"), Some(ApiVersion::V1_0));
        assert_eq!(ApiVersion::parse("1.1"), Some(ApiVersion::V1_1));
        assert_eq!(ApiVersion::parse(" 1.1 "), Some(ApiVersion::V1_1));
    }

    #[test]
    fn rejects_unknown_versions() {
        assert_eq!(ApiVersion::parse("2.0"), None);
        assert_eq!(ApiVersion::parse("1"), None);
        assert_eq!(ApiVersion::parse(""), None);
    }

    #[test]
    fn default_is_the_deprecated_version() {
        assert_eq!(ApiVersion::DEFAULT, ApiVersion::V1_0);
        assert!(ApiVersion::DEFAULT.is_deprecated());
        assert!(!ApiVersion::V1_1.is_deprecated());
    }

    #[test]
    fn every_route_declares_both_versions() {
        for (method, path, versions) in ROUTE_VERSIONS.iter().copied() {
            let declared = declared_versions(method, path).unwrap();
            assert_eq!(declared, versions);
            assert!(declared.contains(&ApiVersion::V1_0));
            assert!(declared.contains(&ApiVersion::V1_1));
        }
    }

    #[test]
    fn unknown_route_has_no_declared_versions() {
        assert!(declared_versions("GET", "/nope").is_none());
        assert!(declared_versions("PATCH", "/todoitems/{id}").is_none());
    }
}
