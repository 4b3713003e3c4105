use crate::cli::commands::{resolve_cursor, resolve_today};
use crate::cli::parser::{Cli, Commands, NavDirection};
use crate::config::Config;
use crate::errors::AppResult;

/// Print the reference date and header title after one cursor move.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Nav {
        direction,
        mode,
        date,
    } = &cli.command
    {
        let today = resolve_today(cli)?;
        let cursor = resolve_cursor(cfg, *mode, date.as_ref(), today)?;

        let moved = match direction {
            NavDirection::Next => cursor.next(),
            NavDirection::Prev => cursor.prev(),
            NavDirection::Today => cursor.today(today),
        };

        println!("{}", moved.reference_date.format("%Y-%m-%d"));
        println!("{}", moved.title());
    }
    Ok(())
}
