use crate::commands::helpers::{parse_amount, position_of};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{supplied, ArticleEdit};
use crate::store::DataStore;
use log::info;

/// Applies `edit` to the article with `id`.
///
/// All replacement values are validated before any field changes, so a bad
/// quantity or price leaves the article exactly as it was.
pub fn run<S: DataStore>(store: &mut S, id: u64, edit: &ArticleEdit) -> Result<CmdResult> {
    let mut articles = store.load()?;
    let pos = position_of(&articles, id)?;

    let quantity = supplied(&edit.quantity).map(parse_amount).transpose()?;
    let unit_price = supplied(&edit.unit_price).map(parse_amount).transpose()?;

    let mut result = CmdResult::default();
    if edit.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Nothing to change for article {}.",
            id
        )));
        return Ok(result.with_affected_articles(vec![articles[pos].clone()]));
    }

    let article = &mut articles[pos];
    if let Some(name) = supplied(&edit.name) {
        article.name = name.to_string();
    }
    if let Some(category) = supplied(&edit.category) {
        article.category = category.to_string();
    }
    if let Some(quantity) = quantity {
        article.quantity = quantity;
    }
    if let Some(unit_price) = unit_price {
        article.unit_price = unit_price;
    }
    if let Some(description) = supplied(&edit.description) {
        article.description = description.to_string();
    }
    let updated = article.clone();
    store.save(&articles)?;

    info!("event=article_updated id={}", updated.id);

    result.add_message(CmdMessage::success(format!(
        "Article {} updated: {}",
        updated.id, updated.name
    )));
    Ok(result.with_affected_articles(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::NOT_NUMERIC;
    use crate::error::TallyError;
    use crate::model::Article;
    use crate::store::memory::fixtures::{article, StoreFixture};

    fn stocked() -> crate::store::memory::InMemoryStore {
        let mut pen = article(1, "Pen", "Office", 10.0, 0.5);
        pen.description = "blue".into();
        StoreFixture::new()
            .with_article(pen)
            .with_article(article(2, "Hammer", "Tools", 1.0, 9.99))
            .store
    }

    #[test]
    fn updates_only_the_supplied_field() {
        let mut store = stocked();
        let before: Vec<Article> = store.articles().to_vec();
        let edit = ArticleEdit {
            unit_price: Some("0.75".into()),
            ..Default::default()
        };
        run(&mut store, 1, &edit).unwrap();

        let after = &store.articles()[0];
        assert_eq!(after.unit_price, 0.75);
        assert_eq!(after.id, before[0].id);
        assert_eq!(after.name, before[0].name);
        assert_eq!(after.category, before[0].category);
        assert_eq!(after.quantity, before[0].quantity);
        assert_eq!(after.description, before[0].description);
        assert_eq!(store.articles()[1], before[1]);
    }

    #[test]
    fn blank_entries_keep_current_values() {
        let mut store = stocked();
        let edit = ArticleEdit {
            name: Some("Gel pen".into()),
            category: Some("".into()),
            quantity: Some("  ".into()),
            unit_price: None,
            description: Some("".into()),
        };
        run(&mut store, 1, &edit).unwrap();

        let after = &store.articles()[0];
        assert_eq!(after.name, "Gel pen");
        assert_eq!(after.category, "Office");
        assert_eq!(after.quantity, 10.0);
        assert_eq!(after.description, "blue");
    }

    #[test]
    fn bad_number_aborts_whole_edit() {
        let mut store = stocked();
        let edit = ArticleEdit {
            name: Some("Renamed".into()),
            quantity: Some("12".into()),
            unit_price: Some("free".into()),
            ..Default::default()
        };
        let err = run(&mut store, 1, &edit).unwrap_err();
        assert!(matches!(err, TallyError::Validation(msg) if msg == NOT_NUMERIC));
        assert_eq!(store.articles()[0].name, "Pen");
        assert_eq!(store.articles()[0].quantity, 10.0);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = stocked();
        let edit = ArticleEdit {
            name: Some("X".into()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut store, 42, &edit),
            Err(TallyError::NotFound(id)) if id == "42"
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn empty_edit_warns_without_saving() {
        let mut store = stocked();
        let result = run(&mut store, 2, &ArticleEdit::default()).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn edit_keeps_position_in_collection() {
        let mut store = stocked();
        let edit = ArticleEdit {
            name: Some("Anvil".into()),
            ..Default::default()
        };
        run(&mut store, 1, &edit).unwrap();
        let ids: Vec<u64> = store.articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
