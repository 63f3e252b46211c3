//! Terminal layout for roster output.
//!
//! Everything goes through [`line`], which emits on the print target so the
//! formatter writes it without a level prefix.

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use roster_common::config::Config;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// A labelled value in a field list or a tree.
pub type Row<'a> = (&'a str, ColoredString);

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn blank() {
    line("");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || !cfg.shows_headers() {
        return;
    }

    let title: String = format!(" roster v{} ", env!("CARGO_PKG_VERSION"));
    let fill: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()) + 2);
    line(&format!(
        "{}{}{}",
        "╔═".color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        "═".repeat(fill).color(colors::SEPARATOR)
    ));
}

/// Opens a named block of output. Hidden from `-q` on.
pub fn section(title: &str, cfg: &Config) {
    if !cfg.shows_headers() {
        return;
    }

    let title: String = title.to_uppercase();
    let fill: usize = TOTAL_WIDTH.saturating_sub(title.chars().count() + 4);
    line(&format!(
        "{} {} {}",
        "──".color(colors::SEPARATOR),
        title.color(colors::PRIMARY),
        "─".repeat(fill).color(colors::SEPARATOR)
    ));
}

fn key_width(rows: &[Row<'_>]) -> usize {
    rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0)
}

/// Prints `> key....: value` lines with the colons lined up.
pub fn fields(rows: &[Row<'_>]) {
    let width: usize = key_width(rows);
    for (key, value) in rows {
        let dots: String = ".".repeat(width.saturating_sub(key.len()) + 1);
        line(&format!(
            "{} {}{}{} {}",
            ">".color(colors::SEPARATOR),
            key.color(colors::PRIMARY),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Heading of a numbered entry; its details follow through [`branches`].
pub fn entry(idx: usize, title: &str) {
    line(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));
}

pub fn branches(rows: &[Row<'_>]) {
    let width: usize = key_width(rows);
    for (i, (key, value)) in rows.iter().enumerate() {
        let branch: &str = if i + 1 == rows.len() { "└─" } else { "├─" };
        line(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(width.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn rule() {
    line(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn centered(msg: &ColoredString) {
    let text: String = msg.to_string();
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(&text)) / 2);
    line(&format!("{pad}{text}"));
}
