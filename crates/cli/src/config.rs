//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment variable a
//! workflow runner sets for the corresponding action input. [`Args`] is the raw
//! clap view; [`Config`] is the validated form the rest of the binary uses.

use std::path::PathBuf;
use std::time::Duration;

use board::BoardError;
use clap::{Parser, ValueEnum};
use github::{GithubConfig, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL};
use placement::IterationMode;

/// Adds the triggering issue to a column of one or more project boards.
#[derive(Parser)]
#[command(name = "issue-to-project", version, about, long_about = None)]
pub struct Args {
    /// Token used to authenticate against the GitHub API.
    #[arg(long, env = "INPUT_ACTION-TOKEN", hide_env_values = true)]
    pub action_token: String,

    /// Comma-separated project board URLs.
    #[arg(long, env = "INPUT_PROJECT-URL")]
    pub project_url: String,

    /// Comma-separated column names: one for every board, or one per board.
    #[arg(long, env = "INPUT_COLUMN-NAME")]
    pub column_name: String,

    /// Path of the triggering event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GraphQL API endpoint.
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    pub graphql_url: String,

    /// Which of the configured boards to visit.
    #[arg(long, env = "INPUT_ITERATION", value_enum, default_value_t = Iteration::FirstOutcome)]
    pub iteration: Iteration,

    /// Per-request timeout, in seconds.
    #[arg(long, env = "INPUT_TIMEOUT-SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces are only exported when set.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

/// `--iteration` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Iteration {
    /// Stop after the first board.
    FirstOutcome,
    /// Visit every board.
    EveryProject,
}

impl From<Iteration> for IterationMode {
    fn from(value: Iteration) -> Self {
        match value {
            Iteration::FirstOutcome => IterationMode::FirstOutcome,
            Iteration::EveryProject => IterationMode::EveryProject,
        }
    }
}

/// `--log-format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Validated runtime configuration.
#[derive(Debug)]
pub struct Config {
    pub github: GithubConfig,
    pub project_urls: String,
    pub column_names: String,
    pub event_path: PathBuf,
    pub mode: IterationMode,
}

impl TryFrom<Args> for Config {
    type Error = BoardError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let token = args.action_token.trim();
        if token.is_empty() {
            return Err(BoardError::configuration("action token is empty"));
        }
        for (name, url) in [("api-url", &args.api_url), ("graphql-url", &args.graphql_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(BoardError::configuration(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }
        if args.timeout_secs == 0 {
            return Err(BoardError::configuration("timeout-secs must be greater than zero"));
        }

        Ok(Self {
            github: GithubConfig::new(token)
                .with_api_url(args.api_url)
                .with_graphql_url(args.graphql_url)
                .with_timeout(Duration::from_secs(args.timeout_secs)),
            project_urls: args.project_url,
            column_names: args.column_name,
            event_path: args.event_path,
            mode: args.iteration.into(),
        })
    }
}
