//! rTimegrid main entrypoint.

use rtimegrid::run;
use rtimegrid::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
