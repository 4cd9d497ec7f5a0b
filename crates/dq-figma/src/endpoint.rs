//! Endpoint Router
//!
//! Maps a symbolic endpoint key plus a path parameter onto a fully
//! qualified Figma API URL. The registry is a fixed enum; there is no
//! runtime registration.

use reqwest::Url;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Figma API endpoints
pub mod endpoints {
    /// Base API URL
    pub const BASE_URL: &str = "https://api.figma.com/v1";

    /// Placeholder substituted with the caller's parameter
    pub const PARAM: &str = "{param}";
}

/// Query string forwarded verbatim; order is preserved
pub type QueryParams = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unsupported endpoint: {0}")]
    UnsupportedEndpoint(String),

    #[error("Endpoint '{0}' requires a parameter")]
    MissingParameter(&'static str),

    #[error("Invalid parameter '{param}' for endpoint '{endpoint}'")]
    InvalidParameter { endpoint: &'static str, param: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Every endpoint the router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Files,
    Images,
    Projects,
    TeamProjects,
    Components,
    ComponentSets,
    Styles,
    Comments,
    UserMe,
    FileNodes,
    TeamComponents,
    TeamStyles,
}

impl Endpoint {
    pub const ALL: [Endpoint; 12] = [
        Endpoint::Files,
        Endpoint::Images,
        Endpoint::Projects,
        Endpoint::TeamProjects,
        Endpoint::Components,
        Endpoint::ComponentSets,
        Endpoint::Styles,
        Endpoint::Comments,
        Endpoint::UserMe,
        Endpoint::FileNodes,
        Endpoint::TeamComponents,
        Endpoint::TeamStyles,
    ];

    /// Symbolic key used by callers
    pub fn key(&self) -> &'static str {
        match self {
            Endpoint::Files => "files",
            Endpoint::Images => "images",
            Endpoint::Projects => "projects",
            Endpoint::TeamProjects => "team_projects",
            Endpoint::Components => "components",
            Endpoint::ComponentSets => "component_sets",
            Endpoint::Styles => "styles",
            Endpoint::Comments => "comments",
            Endpoint::UserMe => "user_me",
            Endpoint::FileNodes => "file_nodes",
            Endpoint::TeamComponents => "team_components",
            Endpoint::TeamStyles => "team_styles",
        }
    }

    /// Path template relative to the API base
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Files => "/files/{param}",
            Endpoint::Images => "/images/{param}",
            Endpoint::Projects => "/projects/{param}",
            Endpoint::TeamProjects => "/teams/{param}/projects",
            Endpoint::Components => "/components/{param}",
            Endpoint::ComponentSets => "/component_sets/{param}",
            Endpoint::Styles => "/styles/{param}",
            Endpoint::Comments => "/files/{param}/comments",
            Endpoint::UserMe => "/me",
            Endpoint::FileNodes => "/files/{param}/nodes",
            Endpoint::TeamComponents => "/teams/{param}/components",
            Endpoint::TeamStyles => "/teams/{param}/styles",
        }
    }

    /// What the parameter identifies, for help text
    pub fn param_hint(&self) -> Option<&'static str> {
        match self {
            Endpoint::Files | Endpoint::Images | Endpoint::Comments | Endpoint::FileNodes => {
                Some("FILE_KEY")
            }
            Endpoint::Projects => Some("PROJECT_ID"),
            Endpoint::TeamProjects | Endpoint::TeamComponents | Endpoint::TeamStyles => {
                Some("TEAM_ID")
            }
            Endpoint::Components | Endpoint::ComponentSets | Endpoint::Styles => Some("KEY"),
            Endpoint::UserMe => None,
        }
    }

    pub fn requires_param(&self) -> bool {
        self.template().contains(endpoints::PARAM)
    }

    /// Trimmed parameter, or `None` for templates without one. `.` and `..`
    /// are rejected.
    fn checked_param<'a>(&self, param: &'a str) -> Result<Option<&'a str>, RouteError> {
        if !self.requires_param() {
            return Ok(None);
        }
        match param.trim() {
            "" => Err(RouteError::MissingParameter(self.key())),
            "." | ".." => Err(RouteError::InvalidParameter {
                endpoint: self.key(),
                param: param.to_string(),
            }),
            param => Ok(Some(param)),
        }
    }

    /// Substitute the parameter into the template, unencoded (for display)
    pub fn path(&self, param: &str) -> Result<String, RouteError> {
        Ok(match self.checked_param(param)? {
            Some(param) => self.template().replacen(endpoints::PARAM, param, 1),
            None => self.template().to_string(),
        })
    }

    /// Full URL against `base`, with optional query string. The parameter
    /// always fills exactly one path segment; `/`, `?`, `#` and `%` in it are
    /// percent-encoded.
    pub fn url(&self, base: &str, param: &str, query: Option<&QueryParams>) -> Result<Url, RouteError> {
        let param = self.checked_param(param)?;
        let base = base.trim_end_matches('/');
        let invalid = |reason: String| RouteError::InvalidUrl {
            url: base.to_string(),
            reason,
        };

        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("base URL cannot carry a path".to_string()))?;
            segments.pop_if_empty();
            for segment in self.template().trim_start_matches('/').split('/') {
                match param {
                    Some(param) if segment == endpoints::PARAM => segments.push(param),
                    _ => segments.push(segment),
                };
            }
        }

        if let Some(params) = query.filter(|params| !params.is_empty()) {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Endpoint {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|e| e.key() == s)
            .ok_or_else(|| RouteError::UnsupportedEndpoint(s.to_string()))
    }
}

/// Resolve an endpoint key into a URL against `base`
pub fn resolve(
    base: &str,
    key: &str,
    param: &str,
    query: Option<&QueryParams>,
) -> Result<Url, RouteError> {
    key.parse::<Endpoint>()?.url(base, param, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves() {
        for endpoint in Endpoint::ALL {
            let url = resolve(endpoints::BASE_URL, endpoint.key(), "KEY123", None).unwrap();
            let expected = endpoint.template().replace("{param}", "KEY123");
            assert_eq!(url.as_str(), format!("{}{}", endpoints::BASE_URL, expected));

            let occurrences = url.as_str().matches("KEY123").count();
            if endpoint.requires_param() {
                assert_eq!(occurrences, 1, "{} should contain the param once", endpoint);
            } else {
                assert_eq!(occurrences, 0);
            }
        }
    }

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(Endpoint::ALL.len(), 12);
        let without_param: Vec<_> = Endpoint::ALL.iter().filter(|e| !e.requires_param()).collect();
        assert_eq!(without_param, vec![&Endpoint::UserMe]);
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.key().parse::<Endpoint>().unwrap(), endpoint);
            assert_eq!(endpoint.param_hint().is_some(), endpoint.requires_param());
        }
    }

    #[test]
    fn test_specific_paths() {
        assert_eq!(Endpoint::TeamProjects.path("42").unwrap(), "/teams/42/projects");
        assert_eq!(Endpoint::Comments.path("abc").unwrap(), "/files/abc/comments");
        assert_eq!(Endpoint::UserMe.path("").unwrap(), "/me");
        assert_eq!(Endpoint::UserMe.path("ignored").unwrap(), "/me");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        for key in ["", "file", "FILES", "users", "files/"] {
            let err = resolve(endpoints::BASE_URL, key, "abc", None).unwrap_err();
            assert_eq!(err, RouteError::UnsupportedEndpoint(key.to_string()));
        }
    }

    #[test]
    fn test_missing_param() {
        let err = resolve(endpoints::BASE_URL, "files", "  ", None).unwrap_err();
        assert_eq!(err, RouteError::MissingParameter("files"));
    }

    #[test]
    fn test_param_stays_in_one_segment() {
        let cases = [
            ("../../me", "/v1/files/..%2F..%2Fme"),
            ("abc#frag", "/v1/files/abc%23frag"),
            ("abc?x=1", "/v1/files/abc%3Fx=1"),
            ("a/b", "/v1/files/a%2Fb"),
            ("100%", "/v1/files/100%25"),
        ];
        for (param, expected) in cases {
            let url = resolve(endpoints::BASE_URL, "files", param, None).unwrap();
            assert_eq!(url.host_str(), Some("api.figma.com"));
            assert_eq!(url.path(), expected, "param {:?}", param);
            assert!(url.query().is_none(), "param {:?}", param);
            assert!(url.fragment().is_none(), "param {:?}", param);
        }

        let url = resolve(endpoints::BASE_URL, "comments", "a/b", None).unwrap();
        assert_eq!(url.path(), "/v1/files/a%2Fb/comments");
    }

    #[test]
    fn test_dot_params_rejected() {
        for param in [".", "..", " .. "] {
            let err = resolve(endpoints::BASE_URL, "files", param, None).unwrap_err();
            assert!(matches!(err, RouteError::InvalidParameter { endpoint: "files", .. }));
        }
    }

    #[test]
    fn test_base_without_path() {
        let url = resolve("http://127.0.0.1:8080", "user_me", "", None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/me");
    }

    #[test]
    fn test_query_params_appended() {
        let query = vec![
            ("ids".to_string(), "1:2,1:3".to_string()),
            ("depth".to_string(), "2".to_string()),
        ];
        let url = resolve("https://api.figma.com/v1/", "file_nodes", "abc", Some(&query)).unwrap();
        assert_eq!(url.path(), "/v1/files/abc/nodes");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, query);
    }

    #[test]
    fn test_empty_query_adds_nothing() {
        let url = resolve(endpoints::BASE_URL, "images", "abc", Some(&Vec::new())).unwrap();
        assert!(url.query().is_none());
    }
}
