//! CLI output.
//!
//! A command prints either text (a header, a table or a notice, then a
//! one-line summary) or, with `--json`, exactly one JSON document. The text
//! helpers are silent in JSON mode and under `--quiet`. Errors always go to
//! stderr.

use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde_json::{json, Value};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    const fn text(self) -> bool {
        !self.json && !self.quiet
    }
}

/// How a notice reads: something happened, or there was nothing to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Done,
    Note,
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    *OUTPUT_CONFIG
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .read()
}

pub fn configure(config: OutputConfig) {
    *OUTPUT_CONFIG
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

/// `fanboard <version>` followed by what is being shown.
pub fn header(context: &str) {
    if current().text() {
        println!(
            "{} {}  {}",
            "fanboard".bold(),
            env!("CARGO_PKG_VERSION").dimmed(),
            context
        );
        println!();
    }
}

pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    if current().text() {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }
}

pub fn notice(tone: Tone, message: &str) {
    if let Some(line) = render_notice(current(), tone, message) {
        println!("{line}");
    }
}

/// Counts printed under a table, e.g. `20 entries · 3 favorited`.
pub fn summary(counts: &[(&str, usize)]) {
    if current().text() {
        println!("{}", render_summary(counts).dimmed());
    }
}

pub fn error(message: &str) {
    eprintln!("{}", render_error(current(), message));
}

/// The single JSON document of a `--json` run.
pub fn document(value: Value) {
    println!("{value}");
}

fn render_notice(config: OutputConfig, tone: Tone, message: &str) -> Option<String> {
    if !config.text() {
        return None;
    }
    let line = match tone {
        Tone::Done => format!("{} {message}", "✓".green()),
        Tone::Note => format!("{} {message}", "•".yellow()),
    };
    Some(line)
}

fn render_summary(counts: &[(&str, usize)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{count} {label}"))
        .collect::<Vec<_>>()
        .join(" · ")
}

fn render_error(config: OutputConfig, message: &str) -> String {
    if config.json {
        json!({ "error": message }).to_string()
    } else {
        format!("{} {message}", "×".red())
    }
}
