//! quizme configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizme configuration, shared by the server and the CLI client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizmeConfig {
    /// Address the server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from browser front ends.
    #[serde(default = "default_true")]
    pub cors: bool,
    /// Base URL the CLI talks to.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Client request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8088
}
fn default_true() -> bool {
    true
}
fn default_server_url() -> String {
    "http://localhost:8088".to_string()
}
fn default_timeout() -> u64 {
    10
}

impl Default for QuizmeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: true,
            server_url: default_server_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl QuizmeConfig {
    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    resolve_env_vars_with(s, |name| std::env::var(name).ok())
}

/// Substituted values are not rescanned, so a value containing `${...}` is
/// kept as-is.
fn resolve_env_vars_with(s: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&lookup(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizme.toml` in the current directory
/// 2. `~/.config/quizme/config.toml`
///
/// Environment variable overrides: `QUIZME_HOST`, `QUIZME_PORT`, `QUIZME_SERVER_URL`.
pub fn load_config() -> Result<QuizmeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizme.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loading config from {}", path.display());
            toml::from_str::<QuizmeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizmeConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config.host = resolve_env_vars(&config.host);
    config.server_url = resolve_env_vars(&config.server_url);

    Ok(config)
}

fn apply_env_overrides(
    config: &mut QuizmeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(host) = lookup("QUIZME_HOST") {
        config.host = host;
    }
    if let Some(port) = lookup("QUIZME_PORT") {
        config.port = port
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZME_PORT value: '{port}'"))?;
    }
    if let Some(url) = lookup("QUIZME_SERVER_URL") {
        config.server_url = url;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizme"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_QUIZME_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_QUIZME_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("http://${_QUIZME_TEST_VAR}:8088"),
            "http://hello:8088"
        );
        std::env::remove_var("_QUIZME_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        let lookup = |name: &str| match name {
            "LOOP" => Some("x${LOOP}y".to_string()),
            "PORT" => Some("9000".to_string()),
            _ => None,
        };
        assert_eq!(resolve_env_vars_with("${LOOP}", lookup), "x${LOOP}y");
        assert_eq!(
            resolve_env_vars_with("${LOOP}:${PORT}/${MISSING}", lookup),
            "x${LOOP}y:9000/"
        );
        assert_eq!(resolve_env_vars_with("open ${NAME", lookup), "open ${NAME");
    }

    #[test]
    fn default_config() {
        let config = QuizmeConfig::default();
        assert_eq!(config.port, 8088);
        assert_eq!(config.bind_addr(), "0.0.0.0:8088");
        assert_eq!(config.server_url, "http://localhost:8088");
        assert!(config.cors);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: QuizmeConfig = toml::from_str("port = 9000\ncors = false\n").unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.cors);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn env_overrides() {
        let mut config = QuizmeConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            "QUIZME_PORT" => Some("9100".into()),
            "QUIZME_SERVER_URL" => Some("http://quiz.local:9100".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.server_url, "http://quiz.local:9100");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn bad_port_override_is_an_error() {
        let mut config = QuizmeConfig::default();
        let result = apply_env_overrides(&mut config, |key| {
            (key == "QUIZME_PORT").then(|| "eighty".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizme.toml");
        std::fs::write(&path, "host = \"127.0.0.1\"\nrequest_timeout_secs = 3\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.request_timeout_secs, 3);
    }
}
