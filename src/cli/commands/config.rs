use crate::cli::commands::config_path;
use crate::cli::parser::{Cli, Commands};
use crate::config::{Config, check};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: run_check,
        fix,
    } = &cli.command
    {
        let path = config_path(cli);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *run_check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults in use",
                    path.display()
                ));
                return Ok(());
            }

            if *fix {
                let added = check::fill_missing(&path)?;
                if added.is_empty() {
                    success("Configuration file is complete");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = check::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `walkcal config --check --fix` to add them with default values");
                }
            }
        }
    }

    Ok(())
}
