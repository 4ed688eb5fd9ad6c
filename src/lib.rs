pub mod cli;
pub mod database;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use anyhow::Context;

use cli::Cli;
use services::config::ReconcileSettings;
use services::reconcile::{self, ReconcileOptions, TreeSource};

/// CLI entry point: load settings, open the roster, reconcile, print the report.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = ReconcileSettings::load(&cli.config)
        .with_context(|| format!("loading settings from {}", cli.config.display()))?;

    let pool = database::connect(&settings.database_url)
        .await
        .context("opening roster database")?;

    let source = match cli.tree {
        Some(path) => TreeSource::JsonFile(path),
        None => TreeSource::Local,
    };
    let options = ReconcileOptions {
        dry_run: cli.dry_run,
        force: cli.force,
    };

    let report = reconcile::run_reconcile(&pool, &settings.sections, &source, options)
        .await
        .context("reconciliation aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", reconcile::render_text(&report));
    }

    if report.counts.errors > 0 {
        log::warn!("{} members could not be linked", report.counts.errors);
    }
    Ok(())
}
