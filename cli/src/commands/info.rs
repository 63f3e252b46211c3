use colored::*;
use roster_common::config::Config;
use roster_core::department::FISCAL_YEAR;

use crate::terminal::{colors, print};

pub fn info(cfg: &Config) {
    print::section("about the tool", cfg);
    print::line(
        &"Roster demonstrates greeters and department rosters."
            .color(colors::TEXT_DEFAULT)
            .to_string(),
    );
    print::blank();

    let log_filter: String = std::env::var("RUST_LOG").unwrap_or_else(|_| String::from("info"));
    print::fields(&[
        ("Version", env!("CARGO_PKG_VERSION").normal()),
        ("Fiscal year", FISCAL_YEAR.to_string().normal()),
        ("Log filter", log_filter.normal()),
    ]);
}
