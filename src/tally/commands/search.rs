use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchField;
use crate::store::DataStore;
use log::debug;

pub const NO_RESULTS: &str = "No matching articles found.";

/// Case-insensitive exact match on one field, keeping collection order.
pub fn run<S: DataStore>(store: &S, field: SearchField, value: &str) -> Result<CmdResult> {
    let articles = store.load()?;
    let target = value.trim().to_lowercase();

    let matches: Vec<_> = articles
        .into_iter()
        .filter(|a| field.value_of(a).to_lowercase() == target)
        .collect();

    debug!("event=article_search field={} hits={}", field, matches.len());

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(NO_RESULTS));
    }
    Ok(result.with_listed_articles(matches))
}
