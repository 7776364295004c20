//! tstamp main entrypoint.

use tstamp::run;
use tstamp::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
