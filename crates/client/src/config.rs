/// API host used when `TODO_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Path prefix used when `TODO_API_PREFIX` is unset.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Where the client sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub prefix: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            prefix: prefix.into(),
        }
    }

    /// `TODO_API_URL` and `TODO_API_PREFIX`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            base_url: get("TODO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            prefix: get("TODO_API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.to_string()),
        }
    }

    /// Base URL joined with the prefix, e.g. `http://localhost:5000/api`.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let prefix = self.prefix.trim().trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_API_PREFIX)
    }
}
