use crate::cli::commands::config_path;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Snapshot;
use crate::ui::messages::{info, success};
use std::fs;

use crate::cli::parser::{Cli, Commands};

/// Handle the `init` command
///
/// This creates:
///  - the configuration file (kept unless `--force`)
///  - an empty snapshot at the configured data file, if none exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });
    let path = config_path(cli);

    let mut to_write = Config::default();
    to_write.data_file = cfg.data_file.clone();

    if path.exists() && !force {
        info(format!("Config file already present: {}", path.display()));
    } else {
        to_write.save_to(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    let data = cfg.data_path();
    if data.exists() {
        info(format!("Snapshot already present: {}", data.display()));
    } else {
        if let Some(dir) = data.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let empty = serde_json::to_string_pretty(&Snapshot::default())?;
        fs::write(&data, empty)?;
        success(format!("Snapshot:    {}", data.display()));
    }

    Ok(())
}
