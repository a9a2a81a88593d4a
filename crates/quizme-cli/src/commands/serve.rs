//! The `quizme serve` command.

use anyhow::Result;

use quizme_server::Server;

use super::Connection;

pub async fn execute(conn: &Connection, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = conn.load_config()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    tracing::info!(addr = %config.bind_addr(), cors = config.cors, "starting quizme server");
    Server::new(config).run().await
}
