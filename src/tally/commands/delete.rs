use crate::commands::helpers::position_of;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut articles = store.load()?;
    let pos = position_of(&articles, id)?;
    let removed = articles.remove(pos);
    store.save(&articles)?;

    info!(
        "event=article_deleted id={} remaining={}",
        removed.id,
        articles.len()
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Article '{}' deleted.",
        removed.name
    )));
    Ok(result.with_affected_articles(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, search};
    use crate::error::TallyError;
    use crate::model::{generate_id, NewArticle, SearchField};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_exactly_one() {
        let mut store = StoreFixture::office().with_articles(3).store;
        let before = store.articles().to_vec();
        run(&mut store, 2).unwrap();

        let after = store.articles();
        assert_eq!(after.len(), 3);
        let expected: Vec<_> = before.into_iter().filter(|a| a.id != 2).collect();
        assert_eq!(after, expected.as_slice());
    }

    #[test]
    fn unknown_id_leaves_collection_unchanged() {
        let mut store = StoreFixture::office().store;
        let before = store.articles().to_vec();
        assert!(matches!(
            run(&mut store, 9),
            Err(TallyError::NotFound(id)) if id == "9"
        ));
        assert_eq!(store.articles(), before.as_slice());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn failed_save_is_reported() {
        let mut store = StoreFixture::office().store;
        store.set_simulate_write_error(true);
        assert!(matches!(run(&mut store, 1), Err(TallyError::Io(_))));
        assert_eq!(store.articles().len(), 1);
    }

    #[test]
    fn office_walkthrough() {
        let mut store = StoreFixture::office().store;

        let created = create::run(&mut store, NewArticle::new("Pad", "Office", "5", "1.2")).unwrap();
        assert_eq!(created.affected_articles[0].id, 2);

        let found = search::run(&store, SearchField::Category, "Office").unwrap();
        assert_eq!(found.listed_articles.len(), 2);

        run(&mut store, 1).unwrap();
        let remaining = store.articles();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(remaining[0].name, "Pad");
        assert_eq!(generate_id(remaining).unwrap(), 3);
    }
}
