//! walkcal main entrypoint.

use walkcal::run;
use walkcal::ui::messages::error;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
