use colored::Colorize;

pub fn run() {
    println!(
        "{} {}",
        "gridwire".bold().green(),
        env!("CARGO_PKG_VERSION")
    );
}
