//! gpxfix main entrypoint.

use gpxfix::run;
use gpxfix::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
