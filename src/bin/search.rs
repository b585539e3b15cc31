// file: src/bin/search.rs
// description: GitHub code search entry point (`search <filename> [user/org]`)
// reference: application bootstrap and single request orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use utilkit::utils::logging::{format_error, format_info, format_warning, init_logger};
use utilkit::utils::request_spinner;
use utilkit::{CodeSearchClient, Config, SearchQuery};

const USAGE_NOTES: &str = "\
Environment Variables:
  GITHUB_TOKEN: GitHub personal access token for authentication (recommended)
                Without a token, you may hit rate limits quickly.

Examples:
  search README.md
  search config.yml myusername
  GITHUB_TOKEN=ghp_xxx search package.json myorg

Note: To search across all of GitHub, use without the user/org parameter.
      For better results, consider providing a GitHub token.";

#[derive(Parser)]
#[command(name = "search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "GitHub File Search Tool", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = USAGE_NOTES)]
struct Cli {
    /// The name of the file to search for (e.g., 'config.yml', '*.go')
    filename: String,

    /// Limit search to a specific user or organization
    #[arg(value_name = "USER/ORG")]
    scope: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    if let Err(e) = run(cli).await {
        error!("Search failed: {:#}", e);
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) if path.exists() => {
            info!("Loading configuration from: {}", path.display());
            Config::load(Some(path)).context("Failed to load configuration")?
        }
        Some(path) => {
            warn!(
                "Config file {} not found, using default configuration",
                path.display()
            );
            load_without_file()
        }
        None => load_without_file(),
    };

    let query = SearchQuery::new(cli.filename.as_str(), cli.scope.as_deref())
        .context("Invalid search arguments")?;

    let client = CodeSearchClient::new(&config.search, cli.token)
        .context("Failed to create GitHub client")?;

    print!("{}", search_preamble(&query, client.has_token()));

    debug!("Search expression: {}", query);

    let spinner = request_spinner("Querying GitHub code search", cli.color);
    let result = client.search(&query).await;
    spinner.finish_and_clear();

    let response = result.context("GitHub code search failed")?;

    print!("{}", response.format_listing(&query.filename));

    Ok(())
}

/// Lines printed before the request goes out, including the rate-limit warning.
fn search_preamble(query: &SearchQuery, has_token: bool) -> String {
    let mut output = format!("Searching for file: {}\n", query.filename);
    match &query.scope {
        Some(scope) => output.push_str(&format!("Limited to user/org: {}\n", scope)),
        None => output.push_str("Searching across all GitHub repositories\n"),
    }

    if !has_token {
        output.push_str(&format!(
            "\n{}\n{}\n\n",
            format_warning("Warning: No GITHUB_TOKEN found. You may encounter rate limits."),
            format_info("Set GITHUB_TOKEN environment variable for better experience.")
        ));
    }

    output
}

fn load_without_file() -> Config {
    Config::load(None).unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        Config::default_config()
    })
}
