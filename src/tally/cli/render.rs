//! # Rendering
//!
//! Everything here returns strings so the menu can write to any sink and
//! tests can inspect output. Column layout is computed with display widths,
//! so accented and wide characters line up.

use colored::Colorize;
use tally::api::{CmdMessage, MessageLevel};
use tally::config::TallyConfig;
use tally::error::TallyError;
use tally::model::{total_value, Article};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 10;
const RULE_WIDTH: usize = 80;

pub fn render_articles(articles: &[Article]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} {} {} {}\n",
        cell("ID", ID_WIDTH),
        cell("Name", NAME_WIDTH),
        cell("Category", CATEGORY_WIDTH),
        cell("Quantity", AMOUNT_WIDTH),
        cell("Price", AMOUNT_WIDTH),
        "Description"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for article in articles {
        out.push_str(&format!(
            "{} {} {} {} {} {}\n",
            cell(&article.id.to_string(), ID_WIDTH),
            cell(&article.name, NAME_WIDTH),
            cell(&article.category, CATEGORY_WIDTH),
            cell(&format_amount(article.quantity), AMOUNT_WIDTH),
            cell(&format_amount(article.unit_price), AMOUNT_WIDTH),
            single_line(&article.description)
        ));
    }

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{} article(s), total value {:.2}\n",
        articles.len(),
        total_value(articles)
    ));
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_error(err: &TallyError) -> String {
    format!("{}\n", format!("Error: {}", err).red())
}

pub fn render_config(config: &TallyConfig) -> String {
    TallyConfig::keys()
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

/// Shortest text that reads back as the same number.
pub fn format_amount(value: f64) -> String {
    format!("{}", value)
}

fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

/// Left-aligned, truncated and padded to exactly `width` display columns.
fn cell(s: &str, width: usize) -> String {
    let text = truncate_to_width(&single_line(s), width);
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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
