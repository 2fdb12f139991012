use super::DataStore;
use crate::error::{Result, TallyError};
use crate::model::Article;
use std::cell::Cell;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Vec<Article>,
    corrupt: bool,
    simulate_write_error: bool,
    loads: Cell<usize>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles,
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail as if the document were malformed.
    pub fn set_corrupt(&mut self, corrupt: bool) {
        self.corrupt = corrupt;
    }

    /// Makes every subsequent `save` fail with an I/O error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Article>> {
        self.loads.set(self.loads.get() + 1);
        if self.corrupt {
            let err = serde_json::from_str::<Vec<Article>>("[{").unwrap_err();
            return Err(TallyError::Parse(err));
        }
        Ok(self.articles.clone())
    }

    fn save(&mut self, articles: &[Article]) -> Result<()> {
        if self.simulate_write_error {
            return Err(TallyError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.saves += 1;
        self.articles = articles.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn article(id: u64, name: &str, category: &str, quantity: f64, price: f64) -> Article {
        Article {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price: price,
            description: String::new(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The single-pen collection used throughout the command tests.
        pub fn office() -> Self {
            Self::new().with_article(article(1, "Pen", "Office", 10.0, 0.5))
        }

        pub fn with_article(mut self, article: Article) -> Self {
            self.store.articles.push(article);
            self
        }

        pub fn with_articles(mut self, count: usize) -> Self {
            let start = crate::model::generate_id(&self.store.articles).unwrap_or(1);
            for i in 0..count as u64 {
                let id = start + i;
                self.store.articles.push(article(
                    id,
                    &format!("Article {}", id),
                    "General",
                    (id as f64) * 2.0,
                    1.25,
                ));
            }
            self
        }
    }
}
