use crate::cli::commands::build_view;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::calendar;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        mode,
        date,
        all,
        json,
    } = &cli.command
    {
        let view = build_view(cli, cfg, *mode, date.as_ref(), *all)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            print!("{}", calendar::render(&view, cfg.color && !cli.no_color));
        }
    }
    Ok(())
}
