use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a table or JSON depending on output mode
pub fn print_table<T, R, F>(items: &[T], to_row: F)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(items).unwrap_or_default());
    } else {
        let rows: Vec<R> = items.iter().map(|item| to_row(item)).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Print a message (plain text, or a simple object in JSON mode)
pub fn print_message(message: &str) {
    if is_json_output() {
        println!("{}", message_json(message));
    } else {
        println!("{message}");
    }
}

fn message_json(message: &str) -> String {
    serde_json::json!({ "message": message }).to_string()
}

/// Color a priority name the way Redmine's defaults rank them.
pub fn priority_colored(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "immediate" | "urgent" => name.red().bold().to_string(),
        "high" => name.yellow().bold().to_string(),
        "normal" => name.blue().to_string(),
        "low" => name.bright_black().to_string(),
        _ => name.to_string(),
    }
}

/// Color a status by name.
pub fn status_colored(status: &str) -> String {
    let lower = status.to_lowercase();
    if lower.contains("closed") || lower.contains("resolved") || lower.contains("done") {
        status.green().to_string()
    } else if lower.contains("progress") || lower.contains("started") {
        status.blue().to_string()
    } else if lower.contains("feedback") || lower.contains("review") {
        status.magenta().to_string()
    } else if lower.contains("rejected") || lower.contains("blocked") {
        status.red().to_string()
    } else {
        status.to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
