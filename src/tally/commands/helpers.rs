use crate::error::{Result, TallyError};
use crate::model::Article;

pub const MISSING_FIELD: &str = "missing required field";
pub const NOT_NUMERIC: &str = "quantity/price must be numeric";
pub const INVALID_ID: &str = "invalid id";

/// Parses user-typed id text.
///
/// Anything that is not an integer is `invalid id`. An integer outside the
/// id range (negative, or above `u64::MAX`) names no article, so it is
/// `NotFound` right away.
pub fn parse_id(text: &str) -> Result<u64> {
    let text = text.trim();
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TallyError::validation(INVALID_ID));
    }
    text.parse::<u64>().map_err(|_| TallyError::not_found(text))
}

/// Parses a quantity or price. Only finite values are accepted.
pub fn parse_amount(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TallyError::validation(NOT_NUMERIC)),
    }
}

/// Index of the article with `id`, or `NotFound`.
pub fn position_of(articles: &[Article], id: u64) -> Result<usize> {
    articles
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| TallyError::not_found(id))
}
