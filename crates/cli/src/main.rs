//! Issue-to-project entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: read flags and action-input environment
//!    variables and validate them into a [`config::Config`].
//! 2. **Wire observability**: configure `tracing-subscriber` (human or JSON
//!    output) and, when an endpoint is set, an OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure**: create the [`github::GithubBoard`] and the
//!    [`listener::WorkflowEventFile`] and inject them into
//!    [`placement::CardPlacer`].
//! 4. **Map the result to an exit code**: any outcome exits 0 (including
//!    "no action" outcomes); any error is logged and exits 1.

mod config;
mod observability;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use board::{plan_targets, RunId};
use clap::Parser;
use github::GithubBoard;
use listener::WorkflowEventFile;
use placement::{CardPlacer, Report};
use tracing::{error, info, info_span, Instrument};

use crate::config::{Args, Config};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let telemetry = match observability::init(args.log_format, args.otlp_endpoint.as_deref()) {
        Ok(telemetry) => telemetry,
        Err(err) => {
            eprintln!("#ERROR# {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let run_id = RunId::new_random();
    let result = run(args).instrument(info_span!("placement_run", %run_id)).await;

    let code = match result {
        Ok(report) => {
            info!(created = report.created(), "Finished running: {report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("#ERROR# {err:#}");
            ExitCode::FAILURE
        }
    };

    telemetry.shutdown();
    code
}

async fn run(args: Args) -> anyhow::Result<Report> {
    let config = Config::try_from(args)?;
    info!(
        project_urls = %config.project_urls,
        column_names = %config.column_names,
        mode = ?config.mode,
        "starting placement"
    );

    let plan = plan_targets(&config.project_urls, &config.column_names)?;
    let board = GithubBoard::new(config.github).context("failed to build the GitHub client")?;
    let events = WorkflowEventFile::new(config.event_path);

    let report = CardPlacer::new(Arc::new(board), config.mode)
        .run(plan, &events)
        .await?;
    Ok(report)
}
