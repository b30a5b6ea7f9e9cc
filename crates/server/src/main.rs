//! Docy Server - HTTP REST API for the Docy documentation site
//!
//! Serves the bundled documentation pages and the keyword question-answering
//! endpoint. Configuration comes from `server.*`, `DOCY_SERVER__*` and `PORT`.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
