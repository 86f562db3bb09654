//! ragenda main entrypoint.

use ragenda::run;
use ragenda::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
