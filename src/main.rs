//! obralog main entrypoint.

use obralog::run;
use obralog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
