use std::path::PathBuf;

use clap::Parser;
use color_eyre::{eyre::Context, Result};
use colored::*;
use config::{Environment, Settings};
use findmyshift::StaffRecord;
use human_panic::setup_panic;

use crate::context::GlobalContext;

mod cli;
mod context;
mod telemetry;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic!();

    #[cfg(debug_assertions)]
    color_eyre::install()?;

    dotenvy::dotenv().ok();
    telemetry::init()?;

    let args = cli::Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}

async fn run(args: cli::Args) -> Result<()> {
    tracing::info!("Starting FindMyShift Shift Reporter...");

    tracing::info!("Setting up environment variables...");
    let env = Environment::from_env(args.slack)?;
    let settings = Settings::read(&args.settings).await?;

    let ctx = GlobalContext::new(args, env, settings);
    let output = report(&ctx).await?;

    tracing::info!("Done");
    println!("{} {}", "Saved".green(), output.display().to_string().yellow());

    Ok(())
}

/// Fetch, filter, export, then notify. Returns the written file.
async fn report(ctx: &GlobalContext) -> Result<PathBuf> {
    let client = ctx.client();

    let employees: Vec<StaffRecord> = if ctx.args.all {
        tracing::info!("Getting list of all employees...");
        client.get_employees().await?
    } else {
        tracing::info!("Getting list of employees without shifts...");
        client
            .get_employees_without_shifts_in(ctx.shifts_query())
            .await?
            .into_iter()
            .map(StaffRecord::from)
            .collect()
    };

    let employees = ctx.settings.apply(employees);
    tracing::info!(count = employees.len(), "Exporting employees...");

    let output = ctx.args.output_path();
    std::fs::create_dir_all(&ctx.args.output_dir).with_context(|| {
        format!(
            "unable to create output directory {}",
            ctx.args.output_dir.display()
        )
    })?;
    export::save_to_file(&output, &employees, &ctx.args.format)?;

    if let Some(slack) = &ctx.env.slack {
        tracing::info!(channel = %slack.channel, "Sending list to Slack...");
        slack::send_to_slack_at(
            &ctx.slack_api_url,
            &slack.token,
            &slack.channel,
            &employees,
            slack.username.as_deref(),
            slack.icon_emoji.as_deref(),
        )
        .await?;
    }

    Ok(output)
}
