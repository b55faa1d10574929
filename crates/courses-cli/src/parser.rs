//! Argument parsing.
//!
//! Every `serve` option can also come from the environment (or a `.env`
//! file), so deployments can configure the server without flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use courses_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "courses", version, about = "Course CRUD REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Show the resolved database path
    Paths,
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "COURSES_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "COURSES_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file (defaults to the data directory)
    #[arg(long, env = "COURSES_DATABASE")]
    pub database: Option<PathBuf>,

    /// Require `Authorization: Bearer <token>` on /api requests
    #[arg(long, env = "COURSES_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Allowed CORS origin; repeat for several. Omit to allow any origin
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allowed_origins: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["courses", "serve"]).unwrap();
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, DEFAULT_PORT);
        assert!(args.allowed_origins.is_empty());
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from([
            "courses",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--database",
            "/tmp/c.db",
            "--allow-origin",
            "http://a",
            "--allow-origin",
            "http://b",
        ])
        .unwrap();

        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 9000);
        assert_eq!(args.database, Some(PathBuf::from("/tmp/c.db")));
        assert_eq!(args.allowed_origins, vec!["http://a", "http://b"]);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Cli::try_parse_from(["courses", "serve", "--port", "70000"]).is_err());
    }
}
