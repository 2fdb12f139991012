use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub const NO_RECORDS: &str = "No articles registered.";

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let articles = store.load()?;
    let mut result = CmdResult::default();
    if articles.is_empty() {
        result.add_message(CmdMessage::info(NO_RECORDS));
    }
    Ok(result.with_listed_articles(articles))
}
