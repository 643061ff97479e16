//! timeyourwork main entrypoint.

use timeyourwork::run;
use timeyourwork::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
