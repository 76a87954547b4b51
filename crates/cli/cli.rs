use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{builder::PossibleValuesParser, Parser};
use export::OutputFormat;
use findmyshift::models::DEFAULT_DAYS;
use strum::VariantNames;

/// FindMyShift Shift Reporter
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Output format
    #[arg(
        long,
        short,
        default_value = "json",
        value_parser = PossibleValuesParser::new(OutputFormat::VARIANTS.iter().copied())
    )]
    pub format: String,

    /// Number of days to fetch
    #[arg(long, short, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// First day of the window (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the window (YYYY-MM-DD), defaults to `from` + days
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Export every employee instead of the ones without shifts
    #[arg(long, short)]
    pub all: bool,

    /// Also post the list to Slack
    #[arg(long, short)]
    pub slack: bool,

    /// Blacklist and aliases file
    #[arg(long, default_value = config::DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    #[arg(long, short, default_value = "outputs")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        let name = if self.all {
            "all_employees"
        } else {
            "employees_without_shifts"
        };

        self.output_dir.join(format!("{name}.{}", self.format))
    }
}
