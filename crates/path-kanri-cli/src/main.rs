//! path-kanri CLI
//!
//! Scaffolds route map files and builds paths from them.

mod init;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use path_kanri::{PathParams, QueryParams, RouteRegistry};

/// Named-route path builder.
#[derive(Parser)]
#[command(name = "path-kanri")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a route map stub.
    Init {
        /// Directory to create the route map in.
        #[arg(short, long, default_value = "pathKanri")]
        dir: PathBuf,
    },

    /// Build the path of a route from a route map.
    Check {
        /// Route map file.
        file: PathBuf,

        /// Route name.
        route: String,

        /// Path parameter as `name=value` (repeatable).
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,

        /// Query parameter as `key=value` (repeatable).
        #[arg(short, long = "query", value_parser = parse_pair)]
        query: Vec<(String, String)>,

        /// Prefix the path with the base URL.
        #[arg(long)]
        full: bool,
    },
}

/// Parses a `key=value` argument.
fn parse_pair(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { dir } => {
            init::init(&dir)
                .with_context(|| format!("failed to initialize {}", dir.display()))?;
        }

        Commands::Check {
            file,
            route,
            params,
            query,
            full,
        } => {
            let registry = RouteRegistry::from_json_file(&file)?;
            debug!(routes = registry.len(), "Loaded route map");

            // No -p flags means no params were given at all.
            let params: Option<PathParams> =
                (!params.is_empty()).then(|| params.into_iter().collect());
            let query: QueryParams = query.into_iter().collect();

            let path = if full {
                registry.get_full_path(&route, params.as_ref(), Some(&query))?
            } else {
                registry.get_path(&route, params.as_ref(), Some(&query))?
            };
            println!("{path}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("slug=abc"),
            Ok(("slug".to_string(), "abc".to_string()))
        );
        assert_eq!(parse_pair("q=a=b"), Ok(("q".to_string(), "a=b".to_string())));
        assert!(parse_pair("slug").is_err());
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from([
            "path-kanri",
            "check",
            "routes.json",
            "example",
            "-p",
            "exampleId=1",
            "--param",
            "slug=abc",
            "-q",
            "page=1",
            "--full",
        ])
        .unwrap();

        match cli.command {
            Commands::Check {
                route,
                params,
                query,
                full,
                ..
            } => {
                assert_eq!(route, "example");
                assert_eq!(params.len(), 2);
                assert_eq!(query, vec![("page".to_string(), "1".to_string())]);
                assert!(full);
            }
            Commands::Init { .. } => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_init_default_dir() {
        let cli = Cli::try_parse_from(["path-kanri", "init"]).unwrap();
        match cli.command {
            Commands::Init { dir } => assert_eq!(dir, PathBuf::from("pathKanri")),
            Commands::Check { .. } => panic!("expected init command"),
        }
    }
}
