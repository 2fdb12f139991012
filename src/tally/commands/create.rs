use crate::commands::helpers::{parse_amount, MISSING_FIELD};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyError};
use crate::model::{generate_id, Article, NewArticle};
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, input: NewArticle) -> Result<CmdResult> {
    let name = input.name.trim();
    let category = input.category.trim();
    let quantity = input.quantity.trim();
    let unit_price = input.unit_price.trim();

    if name.is_empty() || category.is_empty() || quantity.is_empty() || unit_price.is_empty() {
        return Err(TallyError::validation(MISSING_FIELD));
    }
    let quantity = parse_amount(quantity)?;
    let unit_price = parse_amount(unit_price)?;

    let mut articles = store.load()?;
    let article = Article {
        id: generate_id(&articles)?,
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        unit_price,
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
    };
    articles.push(article.clone());
    store.save(&articles)?;

    info!("event=article_created id={} total={}", article.id, articles.len());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Article '{}' registered with id {}.",
        article.name, article.id
    )));
    Ok(result.with_affected_articles(vec![article]))
}
