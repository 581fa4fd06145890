//! refdeploy CLI - deploy REFramework.NET build output into a game directory
//!
//! Usage: refdeploy --gamedir=<path> [--bindir=<path>] [--just_copy] [--skip_test_scripts]
//!
//! Links (or copies with `--just_copy`) the plugin binaries, their managed
//! dependencies and the test scripts into `<gamedir>/reframework/plugins`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use refdeploy::config::{load_manifest, resolve_manifest_source, LOG_ENV_VAR};
use refdeploy::domain::ports::{DeployEvent, DeployEventSink};
use refdeploy::error::DeployError;
use refdeploy::infrastructure::JsonEventSink;
use refdeploy::presentation::cli::Cli;
use refdeploy::presentation::{
    create_deploy_use_case, render_plan, render_success, render_summary, render_warnings,
    TextEventSink, Theme,
};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let theme = Theme::detect();
    let events: Box<dyn DeployEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(TextEventSink::new(theme, cli.verbose))
    };

    match run(&cli, &theme, events.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, validation) = match err.downcast_ref::<DeployError>() {
                Some(deploy_err) if deploy_err.is_validation() => (deploy_err.to_string(), true),
                _ => (format!("{:#}", err), false),
            };
            eprintln!("{}", theme.error(&message));
            if cli.json {
                events.on_event(DeployEvent::Failed {
                    message,
                    validation,
                });
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, theme: &Theme, events: &dyn DeployEventSink) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot read the working directory")?;
    let options = cli.deploy_options(cwd.clone());
    let use_case = create_deploy_use_case();

    // Usage and prerequisite errors win over a broken manifest
    use_case.validate(&options)?;

    let source = resolve_manifest_source(cli.manifest.as_deref(), &cwd);
    let loaded = load_manifest(source)?;
    for line in render_warnings(&loaded.warnings, theme) {
        eprintln!("{}", line);
    }

    let plan = use_case.plan(&loaded.manifest, &options)?;

    if cli.dry_run {
        print!("{}", render_plan(&plan));
        return Ok(());
    }

    let report = use_case
        .execute(&plan, events)
        .with_context(|| format!("deploy into {} failed", plan.game_dir.display()))?;

    if !cli.json {
        println!("{}", render_summary(&report));
        println!("{}", render_success(report.mode, theme));
    }
    Ok(())
}
