//! Startup banner and URL display

use super::config::is_all_interfaces;
use super::constants::{APP_NAME, STATIC_ROUTE};

/// Print the startup banner with URLs
pub fn print_banner(host: &str, port: u16, database: &str, static_dir: &str, pokemon: u64) {
    // Use localhost for display when binding to all interfaces
    let display_host = if is_all_interfaces(host) {
        "localhost"
    } else {
        host
    };

    println!();
    println!(
        "  \x1b[1m\x1b[36m{}\x1b[0m \x1b[90mv{}\x1b[0m",
        APP_NAME,
        env!("CARGO_PKG_VERSION")
    );
    println!();

    // Label width: "Static assets:" is 14 chars, pad to 16 for alignment
    const W: usize = 16;

    println!(
        "  \x1b[32m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/results",
        "Search:", display_host, port
    );
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}/api/v1/names?prefix=",
        "Autocomplete:", display_host, port
    );
    println!(
        "  \x1b[33m➜\x1b[0m  \x1b[1m{:<W$}\x1b[0m http://{}:{}{} \x1b[90m({})\x1b[0m",
        "Static assets:", display_host, port, STATIC_ROUTE, static_dir
    );

    if host == "127.0.0.1" || host == "localhost" {
        println!(
            "  \x1b[90m➜  {:<W$} use --host 0.0.0.0 to expose\x1b[0m",
            "Network:"
        );
    }
    println!(
        "  \x1b[90m➜  {:<W$} {} ({} pokemon)\x1b[0m",
        "Database:", database, pokemon
    );

    println!();
}
