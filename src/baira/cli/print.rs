//! Terminal output for the CLI.
//!
//! Layout (widths, truncation, padding) is computed on plain strings; color is
//! applied to the finished segments so widths are never measured with escape codes.

use baira::api::{CmdMessage, MessageLevel};
use baira::config::BairaConfig;
use baira::view::{ListBody, ListView, RowView};
use chrono::{DateTime, Utc};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TIME_WIDTH: usize = 14;
const ROW_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
    pub line_width: usize,
    pub show_age: bool,
}

impl From<&BairaConfig> for PrintOptions {
    fn from(config: &BairaConfig) -> Self {
        Self {
            line_width: config.line_width,
            show_age: config.show_age,
        }
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_views(views: &[ListView], options: PrintOptions) {
    let rendered: Vec<String> = views.iter().map(|v| render_view(v, options)).collect();
    print!("{}", rendered.join("\n"));
}

/// Renders one list: a heading with its count, then rows or the empty state.
pub fn render_view(view: &ListView, options: PrintOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        view.heading.bold(),
        view.count_label.dimmed()
    ));

    match &view.body {
        ListBody::Empty(state) => {
            out.push_str(&format!(
                "{}{}\n",
                ROW_INDENT,
                format!("{} {}", state.icon, state.message).dimmed()
            ));
        }
        ListBody::Rows(rows) => {
            let position_width = rows.len().to_string().len();
            for row in rows {
                out.push_str(&render_row(row, position_width, options));
                out.push('\n');
            }
        }
    }

    out
}

fn render_row(row: &RowView, position_width: usize, options: PrintOptions) -> String {
    let position = format!("{:>width$}. ", row.position, width = position_width);
    let id = format!("  [{}]", row.item_id);
    let age = if options.show_age {
        format_time_ago(row.created_at)
    } else {
        String::new()
    };

    let fixed_width = ROW_INDENT.width() + position.width() + age.width() + id.width();
    let available = options.line_width.saturating_sub(fixed_width).max(1);
    let text = truncate_to_width(&row.text, available);
    let padding = " ".repeat(available.saturating_sub(text.width()));

    format!(
        "{}{}{}{}{}{}",
        ROW_INDENT,
        position.yellow(),
        text,
        padding,
        age.dimmed(),
        id.dimmed()
    )
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
