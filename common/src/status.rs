//! Padded terminal status lines shared by the migration and seeding binaries:
//!
//! ```text
//! Seeding Catalog........................................ done (41.20ms)
//! ```

use colored::*;
use std::io::{self, Write};
use std::time::Duration;

pub const STATUS_COLUMN: usize = 80;

/// Builds `"{verb} {name}"` followed by dots up to [`STATUS_COLUMN`].
///
/// Padding is computed from the uncoloured text so ANSI escapes do not
/// shift the column.
pub fn label(verb: &str, name: &str) -> String {
    let plain_len = verb.len() + 1 + name.len();
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(plain_len));
    format!("{} {}{}", verb, name.bold(), dots)
}

/// Prints the label without a newline so the outcome lands on the same line.
pub fn begin(verb: &str, name: &str) {
    print!("{} ", label(verb, name));
    io::stdout().flush().ok();
}

pub fn done(elapsed: Duration) {
    let time_str = format!("({:.2?})", elapsed).dimmed();
    println!("{} {}", "done".green(), time_str);
}

pub fn skipped(reason: &str) {
    println!("{} {}", "skipped".yellow(), format!("({reason})").dimmed());
}

pub fn failed() {
    println!("{}", "failed".red());
}
