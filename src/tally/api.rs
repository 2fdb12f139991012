//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every UI (the
//! interactive menu, the one-shot subcommands, tests) goes through it.
//!
//! ## Role
//!
//! - **Normalizes inputs**: id text becomes an integer, search selector text
//!   becomes a [`SearchField`]. Malformed input is a `Validation` error here,
//!   before any command runs.
//! - **Dispatches** to `commands/*.rs`.
//! - **Returns structured types** (`Result<CmdResult>`), never strings for
//!   display.
//!
//! ## Generic Over DataStore
//!
//! `TallyApi<S: DataStore>` runs against `FileStore` in production and
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Article, ArticleEdit, NewArticle, SearchField};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for tally operations.
pub struct TallyApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> TallyApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn create_article(&mut self, input: NewArticle) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn list_articles(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_articles(&self, field: &str, value: &str) -> Result<commands::CmdResult> {
        let field: SearchField = field.parse()?;
        commands::search::run(&self.store, field, value)
    }

    /// Looks up one article, for showing current values before an edit.
    pub fn get_article(&self, id: &str) -> Result<Article> {
        let id = commands::helpers::parse_id(id)?;
        let articles = self.store.load()?;
        let pos = commands::helpers::position_of(&articles, id)?;
        Ok(articles[pos].clone())
    }

    pub fn edit_article(&mut self, id: &str, edit: &ArticleEdit) -> Result<commands::CmdResult> {
        let id = commands::helpers::parse_id(id)?;
        commands::edit::run(&mut self.store, id, edit)
    }

    pub fn delete_article(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id = commands::helpers::parse_id(id)?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn has_articles(&self) -> Result<bool> {
        Ok(!self.store.load()?.is_empty())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
