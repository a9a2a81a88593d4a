pub mod app;
pub mod init;
pub mod practice;
pub mod scores;
pub mod serve;
pub mod sets;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use quizme_client::HttpBackend;
use quizme_core::config::{load_config_from, QuizmeConfig};

/// Where to find the config file and the server.
pub struct Connection {
    pub config: Option<PathBuf>,
    pub server: Option<String>,
}

impl Connection {
    pub fn load_config(&self) -> Result<QuizmeConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(url) = &self.server {
            config.server_url = url.clone();
        }
        Ok(config)
    }

    pub fn backend(&self) -> Result<HttpBackend> {
        let config = self.load_config()?;
        HttpBackend::new(&config.server_url, config.request_timeout_secs)
    }
}

/// Print `text`, then read one trimmed line. `None` on end of input.
pub(crate) fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
