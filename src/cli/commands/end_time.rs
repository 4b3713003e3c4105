use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::utils::time::calculate_end_time;

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::EndTime { start, minutes } = &cli.command {
        println!("{}", calculate_end_time(start, *minutes)?);
    }
    Ok(())
}
