use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single ledger entry.
///
/// Field order here is the field order of the persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(default)]
    pub description: String,
}

impl Article {
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Next free id: one past the current maximum, or 1 for an empty collection.
///
/// Ids freed by deletion are never handed out again as long as a higher id
/// is still present. Fails once the maximum id is `u64::MAX`.
pub fn generate_id(articles: &[Article]) -> Result<u64> {
    match articles.iter().map(|a| a.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(TallyError::IdsExhausted(max)),
    }
}

/// Sum of `quantity * unit_price` over the collection.
pub fn total_value(articles: &[Article]) -> f64 {
    articles.iter().map(Article::total).sum()
}

/// Which text field a search compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Category,
}

impl SearchField {
    pub fn value_of<'a>(&self, article: &'a Article) -> &'a str {
        match self {
            SearchField::Name => &article.name,
            SearchField::Category => &article.category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Category => "category",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "category" => Ok(SearchField::Category),
            other => Err(TallyError::validation(format!(
                "invalid search field '{}' (expected name or category)",
                other
            ))),
        }
    }
}

/// Raw, unvalidated input for a new article.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub unit_price: String,
    pub description: Option<String>,
}

impl NewArticle {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Replacement values for an edit. `None` or a blank entry keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct ArticleEdit {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub description: Option<String>,
}

impl ArticleEdit {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.category,
            &self.quantity,
            &self.unit_price,
            &self.description,
        ]
        .iter()
        .all(|field| supplied(field).is_none())
    }
}

/// Trimmed value of an optional entry, or `None` when it was left blank.
pub(crate) fn supplied(entry: &Option<String>) -> Option<&str> {
    entry
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
