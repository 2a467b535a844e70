//! Text and JSON rendering of command results
//!
//! Formatting helpers return plain strings; color is applied only when the
//! result is printed.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde_json::json;

use ghostwriter_core::analytics::{format_distribution, JournalSummary};
use ghostwriter_core::types::{mood_emoji, mood_label};
use ghostwriter_core::JournalEntry;

use crate::commands::CommandResult;

const BAR_UNIT: &str = "██";
const BAR_WIDTH: usize = 5;
const LINE_PREVIEW_CHARS: usize = 60;

/// Output formatting options
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json_format: bool,
    pub no_color: bool,
}

/// Print a command result to stdout
pub fn print_result(result: &CommandResult, options: &OutputOptions) {
    if options.json_format {
        let value = match (&result.data, &result.message) {
            (Some(data), _) => data.clone(),
            (None, Some(message)) => json!({ "message": message }),
            (None, None) => json!({ "success": result.success }),
        };
        match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Failed to serialize output: {}", e),
        }
        return;
    }

    let Some(message) = &result.message else {
        return;
    };
    let mut lines = message.lines();
    if let Some(first) = lines.next() {
        if options.no_color {
            println!("{}", first);
        } else {
            println!("{}", first.bold().cyan());
        }
    }
    for line in lines {
        println!("{}", line);
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LINE_PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(LINE_PREVIEW_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}

/// One-line summary used by `list`
pub fn format_entry_line(entry: &JournalEntry) -> String {
    let (marker, text) = if entry.has_reflection() {
        ("✨", entry.polished_entry.as_deref().unwrap_or_default())
    } else {
        ("  ", entry.note.as_str())
    };
    format!(
        "{}  {} {}  {} {}",
        entry.date,
        entry.mood.emoji(),
        entry.mood,
        marker,
        preview(text)
    )
    .trim_end()
    .to_string()
}

/// Full entry, reflection first with the original words underneath
pub fn format_entry_detail(entry: &JournalEntry) -> String {
    let mut out = format!(
        "{} {} {} ({})",
        entry.date.format("%A, %B %-d, %Y"),
        entry.mood.emoji(),
        entry.mood.label(),
        entry.mood
    );

    match entry.polished_entry.as_deref() {
        Some(polished) if entry.has_reflection() => {
            out.push_str("\n\n✨ Ghost Writer reflection\n");
            out.push_str(polished);
            if !entry.note.is_empty() {
                out.push_str(&format!("\n\nOriginal words: \"{}\"", entry.note));
            }
        }
        _ if entry.note.is_empty() => out.push_str("\n\n(no note)"),
        _ => {
            out.push_str("\n\n");
            out.push_str(&entry.note);
        }
    }
    out
}

pub fn format_summary(summary: &JournalSummary) -> String {
    let average = summary
        .average_mood
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string());
    let distribution = if summary.distribution.is_empty() {
        "-".to_string()
    } else {
        format_distribution(&summary.distribution)
    };

    let mut out = format!(
        "Journal stats ({} entries)\nAverage mood:   {}\nCurrent streak: {} days\nLongest streak: {} days\nDistribution:   {}",
        summary.entries, average, summary.streaks.current, summary.streaks.longest, distribution
    );
    if let Some(insight) = &summary.insight {
        out.push_str(&format!("\n\n💡 {}", insight));
    }
    out
}

/// Horizontal bar per point, oldest first
pub fn format_chart(series: &[(NaiveDate, u8)]) -> String {
    if series.is_empty() {
        return "📊 Log more entries to see your mood chart".to_string();
    }

    let mut out = format!("Mood over the last {} entries", series.len());
    for (date, mood) in series {
        let filled = (*mood as usize).min(BAR_WIDTH);
        let bar = format!(
            "{}{}",
            BAR_UNIT.repeat(filled),
            "  ".repeat(BAR_WIDTH - filled)
        );
        out.push_str(&format!(
            "\n{:<7} {} {} {} {}",
            date.format("%b %-d").to_string(),
            mood_emoji(*mood as i64),
            bar,
            mood,
            mood_label(*mood as i64)
        ));
    }
    out
}
