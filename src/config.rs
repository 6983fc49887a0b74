use std::path::PathBuf;

/// Process-wide settings.
///
/// Built once in `main` and handed to whatever needs it; nothing else
/// reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the game client posts games to and reads reports from.
    pub api_url: String,
    /// Address the API server binds.
    pub bind: String,
    /// PostgreSQL connection string. Without one the API keeps games in memory.
    pub db_url: Option<String>,
    pub log_dir: PathBuf,
    pub ranking_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: String::from("http://127.0.0.1:8000"),
            bind: String::from("127.0.0.1:8000"),
            db_url: None,
            log_dir: PathBuf::from("logs"),
            ranking_limit: crate::RANKING_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Unset or empty variables keep their defaults. An unparseable
    /// ranking limit does too.
    pub fn from_vars<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let default = Self::default();
        Self {
            api_url: get("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.api_url),
            bind: get("BIND_ADDR").unwrap_or(default.bind),
            db_url: get("DB_URL"),
            log_dir: get("LOG_DIR").map(PathBuf::from).unwrap_or(default.log_dir),
            ranking_limit: get("RANKING_LIMIT")
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or(default.ranking_limit),
        }
    }
}
