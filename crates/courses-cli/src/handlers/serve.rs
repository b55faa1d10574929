//! `courses serve`

use anyhow::Result;
use courses_axum::{ServerConfig, start_server};
use courses_core::database_path;

use crate::parser::ServeArgs;

/// Turn CLI arguments into a server config. The default database location
/// is only resolved, and its directory created, when `--database` is absent.
pub fn build_config(args: ServeArgs) -> Result<ServerConfig> {
    let database = match args.database {
        Some(path) => path,
        None => database_path()?,
    };
    let mut config = ServerConfig::new(database)
        .with_host(args.host)
        .with_port(args.port);

    if let Some(token) = args.api_token {
        config = config.with_api_token(token);
    }
    if !args.allowed_origins.is_empty() {
        config = config.with_allowed_origins(args.allowed_origins);
    }

    Ok(config)
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = build_config(args)?;
    start_server(config).await
}
