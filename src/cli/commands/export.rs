use crate::cli::commands::build_view;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        mode,
        date,
        all,
        force,
    } = &cli.command
    {
        let path = Path::new(file);
        let format = match format {
            Some(f) => f.clone(),
            None => ExportFormat::from_path(path)?,
        };

        let view = build_view(cli, cfg, *mode, date.as_ref(), *all)?;
        ExportLogic::export(&view, &format, path, *force)?;
    }
    Ok(())
}
