pub mod config;
pub mod end_time;
pub mod export;
pub mod init;
pub mod nav;
pub mod view;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{BuildOptions, Core, ScheduleView};
use crate::errors::AppResult;
use crate::models::{CalendarCursor, Snapshot, ViewMode};
use crate::utils::date;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Configuration file in effect: `--config` or the standard location.
pub(crate) fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file)
}

/// `--today` when given, the local date otherwise.
pub(crate) fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    date::parse_date_or(cli.today.as_ref(), date::today())
}

pub(crate) fn resolve_cursor(
    cfg: &Config,
    mode: Option<ViewMode>,
    reference: Option<&String>,
    today: NaiveDate,
) -> AppResult<CalendarCursor> {
    let reference_date = date::parse_date_or(reference, today)?;
    Ok(CalendarCursor::new(
        reference_date,
        mode.unwrap_or(cfg.default_view),
    ))
}

/// Load the snapshot and build the view shared by `view` and `export`.
pub(crate) fn build_view(
    cli: &Cli,
    cfg: &Config,
    mode: Option<ViewMode>,
    reference: Option<&String>,
    all: bool,
) -> AppResult<ScheduleView> {
    let today = resolve_today(cli)?;
    let cursor = resolve_cursor(cfg, mode, reference, today)?;
    let snapshot = Snapshot::load(&cfg.data_path())?;

    let mut options = BuildOptions::from_config(cfg, cli.walker.clone(), today);
    if all {
        options.upcoming_only = false;
    }

    Ok(Core::build_view(cursor, &snapshot, &options))
}
