// Fri Oct 16 2026 - Alex

use colored::Colorize;

fn main() {
    if let Err(e) = layout_inspector::ui::cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
