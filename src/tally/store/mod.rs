//! # Storage Layer
//!
//! The whole collection lives in one document. A [`DataStore`] loads all of it
//! and saves all of it; there are no partial updates and no index beyond a
//! linear scan.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a pretty-printed JSON array at an
//!   explicit path chosen when the store is built.
//! - [`memory::InMemoryStore`]: Non-persistent storage for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "name": "Pen",
//!         "category": "Office",
//!         "quantity": 10.0,
//!         "price": 0.5,
//!         "description": ""
//!     }
//! ]
//! ```
//!
//! Every mutating command reloads the document, changes it in memory and
//! writes it back in full. Nothing is cached between commands.

use crate::error::Result;
use crate::model::Article;

pub mod fs;
pub mod memory;

/// Load-all / save-all access to the article collection.
pub trait DataStore {
    /// Read the full collection. A store that was never written is empty.
    fn load(&self) -> Result<Vec<Article>>;

    /// Replace the persisted collection with `articles`.
    fn save(&mut self, articles: &[Article]) -> Result<()>;
}
