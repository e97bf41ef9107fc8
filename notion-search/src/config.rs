//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the API endpoint, per-call timeouts, the
//! remote page size, how many ranked results are returned, and what happens
//! when every workspace fails.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Public Notion REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Value sent in the `Notion-Version` header.
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Largest page size requested from the remote search endpoint.
pub const MAX_PAGE_SIZE: usize = 50;

/// Largest number of ranked results handed back to the host.
pub const MAX_RESULTS: usize = 10;

/// What a query returns when every workspace fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllFailedPolicy {
    /// Return an empty result list. The host sees a normal, empty success.
    #[default]
    Empty,
    /// Return [`SearchError::AllWorkspacesUnreachable`] so the host can show
    /// a diagnostic.
    Error,
}

/// Configuration for workspace resolution and search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the API, without a trailing `/users/me` or `/search`.
    pub base_url: String,
    /// API version header value.
    pub api_version: String,
    /// Per-call HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Page size requested from the remote search endpoint.
    pub page_size: usize,
    /// Maximum number of ranked results to return.
    pub max_results: usize,
    /// Behaviour when every workspace fails during one query.
    pub on_all_failed: AllFailedPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            timeout_seconds: 8,
            page_size: MAX_PAGE_SIZE,
            max_results: MAX_RESULTS,
            on_all_failed: AllFailedPolicy::Empty,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must be an absolute URL
    /// - `timeout_seconds` must be greater than 0
    /// - `page_size` must be within `1..=50`
    /// - `max_results` must be within `1..=10`
    pub fn validate(&self) -> Result<(), SearchError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(SearchError::Config(
                "base_url must be an absolute http(s) URL".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(SearchError::Config(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        if !(1..=MAX_RESULTS).contains(&self.max_results) {
            return Err(SearchError::Config(format!(
                "max_results must be between 1 and {MAX_RESULTS}"
            )));
        }
        Ok(())
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://api.notion.com/v1");
        assert_eq!(config.api_version, "2022-06-28");
        assert_eq!(config.timeout_seconds, 8);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.on_all_failed, AllFailedPolicy::Empty);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn oversized_page_rejected() {
        let config = SearchConfig {
            page_size: 51,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn zero_max_results_rejected() {
        let config = SearchConfig {
            max_results: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn max_results_above_ten_rejected() {
        let config = SearchConfig {
            max_results: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn relative_base_url_rejected() {
        let config = SearchConfig {
            base_url: "api/v1".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = SearchConfig {
            base_url: "http://127.0.0.1:9000/v1/".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("search"), "http://127.0.0.1:9000/v1/search");
    }

    #[test]
    fn policy_deserializes_from_snake_case() {
        let policy: AllFailedPolicy = serde_json::from_str("\"error\"").expect("deserialize");
        assert_eq!(policy, AllFailedPolicy::Error);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"timeout_seconds": 3}"#).expect("deserialize");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.page_size, 50);
    }
}
