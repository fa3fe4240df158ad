use thiserror::Error;

const API_HOST_KEY: &str = "MASTHEAD_API_HOST";
const GITHUB_REPO_KEY: &str = "MASTHEAD_GITHUB_REPO";
const ANNOUNCE_URL_KEY: &str = "MASTHEAD_ANNOUNCE_URL";
const APP_NAME_KEY: &str = "MASTHEAD_APP_NAME";

const DEFAULT_API_HOST: &str = "http://localhost:5000";
const DEFAULT_GITHUB_REPO: &str = "masthead-rs/masthead";
const DEFAULT_APP_NAME: &str = "Masthead";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid repository identifier {0:?}, expected owner/name")]
    InvalidRepo(String),
    #[error("invalid API host {0:?}, expected an http(s) or protocol-relative URL")]
    InvalidApiHost(String),
}

/// Deployment settings the header links are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub api_host: String,
    pub github_repo: String,
    pub announce_url: String,
    pub app_name: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            github_repo: DEFAULT_GITHUB_REPO.to_string(),
            announce_url: default_announce_url(DEFAULT_GITHUB_REPO),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl HeaderConfig {
    /// Reads the values baked in at compile time. A browser has no process
    /// environment, so `option_env!` is the only source.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                API_HOST_KEY => option_env!("MASTHEAD_API_HOST"),
                GITHUB_REPO_KEY => option_env!("MASTHEAD_GITHUB_REPO"),
                ANNOUNCE_URL_KEY => option_env!("MASTHEAD_ANNOUNCE_URL"),
                APP_NAME_KEY => option_env!("MASTHEAD_APP_NAME"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_host = parse_api_host(read(API_HOST_KEY).unwrap_or_else(|| DEFAULT_API_HOST.to_string()))?;
        let github_repo =
            parse_repo(read(GITHUB_REPO_KEY).unwrap_or_else(|| DEFAULT_GITHUB_REPO.to_string()))?;
        let announce_url = read(ANNOUNCE_URL_KEY).unwrap_or_else(|| default_announce_url(&github_repo));
        let app_name = read(APP_NAME_KEY).unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        Ok(Self {
            api_host,
            github_repo,
            announce_url,
            app_name,
        })
    }

    pub fn report_bug_url(&self) -> String {
        format!("https://github.com/{}/issues", self.github_repo)
    }

    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.api_host)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.api_host)
    }

    pub fn metadata_url(&self) -> String {
        format!("{}/api/metadata", self.api_host)
    }
}

fn default_announce_url(repo: &str) -> String {
    format!(
        "https://api.github.com/repos/{}/issues?labels=announce&state=open&per_page=1",
        repo
    )
}

fn parse_api_host(raw: String) -> Result<String, ConfigError> {
    let host = raw.trim().trim_end_matches('/');
    let authority = ["https://", "http://", "//"]
        .iter()
        .find_map(|scheme| host.strip_prefix(scheme));
    match authority {
        Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => {
            Ok(host.to_string())
        }
        _ => Err(ConfigError::InvalidApiHost(raw)),
    }
}

fn parse_repo(raw: String) -> Result<String, ConfigError> {
    let repo = raw.trim();
    let mut parts = repo.split('/');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) => [owner, name].iter().all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }),
        _ => false,
    };
    if valid {
        Ok(repo.to_string())
    } else {
        Err(ConfigError::InvalidRepo(raw))
    }
}
