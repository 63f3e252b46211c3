use colored::*;
use roster_common::config::Config;
use roster_core::calculator::{self, AddFunction};

use crate::terminal::print::{self, Row};

pub fn add(n1: f64, n2: f64, cfg: &Config) {
    print::section("addition", cfg);

    let adder: AddFunction = calculator::add;
    let mut rows: Vec<Row<'_>> = Vec::new();
    if cfg.shows_details() {
        rows.push(("Left", n1.to_string().normal()));
        rows.push(("Right", n2.to_string().normal()));
    }
    rows.push(("Sum", adder(n1, n2).to_string().bold().green()));
    print::fields(&rows);
}
