// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Settings for a feed run.
//!
//! Values come from an optional YAML document and from command-line
//! overrides. [`FeedConfig`] holds the raw, all-optional shape used by both
//! sources; [`FeedSettings::resolve`] merges them, applies defaults and
//! validates the result so later stages can rely on well-formed inputs.

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
    time::Duration
};

use regex::Regex;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{self, Error};

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Client label sent with every request.
pub const DEFAULT_USER_AGENT: &str = "contributors-script";
/// File written when no output path is configured.
pub const DEFAULT_OUTPUT: &str = "contributors.svg";
/// Environment variable carrying the API credential.
pub const TOKEN_ENV: &str = "GH_TOKEN";

const NAME_PATTERN: &str = r"^[A-Za-z0-9_.-]+$";

/// Raw settings document.
///
/// # Examples
///
/// ```
/// use contrib_feed::FeedConfig;
///
/// let config: FeedConfig = serde_yaml::from_str("owner: octocat\nrepo: hello-world\n")
///     .expect("valid settings");
/// assert_eq!(config.repository.as_deref(), Some("hello-world"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Account that owns the repository.
    #[serde(default, alias = "user")]
    pub owner:        Option<String>,
    /// Repository whose contributors are listed.
    #[serde(default, alias = "repo")]
    pub repository:   Option<String>,
    /// Destination of the rendered document.
    #[serde(default)]
    pub output:       Option<PathBuf>,
    /// Base URL of the REST API, e.g. a GitHub Enterprise endpoint.
    #[serde(default, alias = "api-url", alias = "apiUrl")]
    pub api_url:      Option<String>,
    /// Client label sent as `User-Agent`.
    #[serde(default, alias = "user-agent", alias = "userAgent")]
    pub user_agent:   Option<String>,
    /// Optional connect/read timeout in seconds.
    #[serde(default, alias = "timeout-secs", alias = "timeoutSecs")]
    pub timeout_secs: Option<u64>
}

impl FeedConfig {
    /// Overlays `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: FeedConfig) -> FeedConfig {
        FeedConfig {
            owner:        overrides.owner.or(self.owner),
            repository:   overrides.repository.or(self.repository),
            output:       overrides.output.or(self.output),
            api_url:      overrides.api_url.or(self.api_url),
            user_agent:   overrides.user_agent.or(self.user_agent),
            timeout_secs: overrides.timeout_secs.or(self.timeout_secs)
        }
    }
}

/// Parses a settings document from YAML text.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the text is not a valid settings document.
pub fn parse_config(yaml: &str) -> Result<FeedConfig, Error> {
    if yaml.trim().is_empty() {
        return Ok(FeedConfig::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Loads a settings document from disk.
///
/// # Errors
///
/// Returns [`Error::ConfigIo`] when the file cannot be read and
/// [`Error::Parse`] when it is not valid YAML.
pub fn load_config(path: &Path) -> Result<FeedConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::config_io_error(path, source))?;
    parse_config(&contents)
}

/// Validated owner/repository pair.
///
/// Both parts are non-empty and restricted to the characters GitHub allows in
/// account and repository names, so they can be embedded in a request path
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    owner:      String,
    repository: String
}

impl RepositoryRef {
    /// Validates and builds a repository reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when either part is empty or contains
    /// characters outside `[A-Za-z0-9_.-]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrib_feed::RepositoryRef;
    ///
    /// let repository = RepositoryRef::new("octocat", "hello-world")?;
    /// assert_eq!(repository.to_string(), "octocat/hello-world");
    /// assert!(RepositoryRef::new("octocat", "").is_err());
    /// # Ok::<(), contrib_feed::Error>(())
    /// ```
    pub fn new(owner: &str, repository: &str) -> Result<Self, Error> {
        let pattern = Regex::new(NAME_PATTERN)
            .map_err(|e| Error::configuration(format!("invalid name pattern: {e}")))?;

        let owner = validate_name(&pattern, "owner", owner)?;
        let repository = validate_name(&pattern, "repository", repository)?;

        Ok(Self {
            owner,
            repository
        })
    }

    /// Account that owns the repository.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}

fn validate_name(pattern: &Regex, field: &str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::configuration(format!("{field} must be provided")));
    }
    if !pattern.is_match(trimmed) {
        return Err(Error::configuration(format!(
            "{field} '{trimmed}' contains characters outside [A-Za-z0-9_.-]"
        )));
    }
    Ok(trimmed.to_owned())
}

/// HTTP client settings for the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// Base URL without a trailing slash.
    pub base_url:   String,
    /// Client label sent as `User-Agent`.
    pub user_agent: String,
    /// Connect and read timeout; `None` leaves the client defaults.
    pub timeout:    Option<Duration>
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url:   DEFAULT_API_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout:    None
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// Repository whose contributors are listed.
    pub repository: RepositoryRef,
    /// Destination of the rendered document.
    pub output:     PathBuf,
    /// Upstream API client settings.
    pub api:        ApiSettings
}

impl FeedSettings {
    /// Applies defaults to a merged settings document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the owner or repository is
    /// missing or malformed, the API URL is not absolute, or the timeout is
    /// zero.
    pub fn resolve(config: FeedConfig) -> Result<Self, Error> {
        let owner = config
            .owner
            .as_deref()
            .ok_or_else(|| Error::configuration("owner must be provided"))?;
        let repository = config
            .repository
            .as_deref()
            .ok_or_else(|| Error::configuration("repository must be provided"))?;
        let repository = RepositoryRef::new(owner, repository)?;

        let base_url = normalize_api_url(config.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;

        let user_agent = config
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
            .to_owned();

        let timeout = match config.timeout_secs {
            Some(0) => {
                return Err(Error::configuration("timeout_secs must be greater than zero"));
            }
            Some(seconds) => Some(Duration::from_secs(seconds)),
            None => None
        };

        let output = config
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            repository,
            output,
            api: ApiSettings {
                base_url,
                user_agent,
                timeout
            }
        })
    }
}

fn normalize_api_url(raw: &str) -> Result<String, Error> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| Error::configuration(format!("invalid API URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(Error::configuration(format!(
            "API URL '{raw}' must be an absolute http(s) URL, e.g. {DEFAULT_API_URL}"
        )));
    }

    Ok(trimmed.to_owned())
}

/// Returns the API credential or a configuration error when it is absent.
///
/// Called before any client is built so a missing token never reaches the
/// network.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the token is missing or blank.
pub fn require_token(token: Option<&str>) -> Result<&str, Error> {
    token
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::configuration(format!("{TOKEN_ENV} env var is required")))
}
