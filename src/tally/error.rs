use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("{0}")]
    Validation(String),

    /// Carries the id as typed, so negative ids report back verbatim.
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("No article ids left after {0}")]
    IdsExhausted(u64),

    #[error("Corrupt articles document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not encode articles: {0}")]
    Encode(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TallyError {
    pub fn validation(message: impl Into<String>) -> Self {
        TallyError::Validation(message.into())
    }

    pub fn not_found(id: impl ToString) -> Self {
        TallyError::NotFound(id.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u8>>("[").unwrap_err()
    }

    #[test]
    fn encode_and_parse_read_differently() {
        assert!(TallyError::Encode(json_error())
            .to_string()
            .starts_with("Could not encode articles"));
        assert!(TallyError::Parse(json_error())
            .to_string()
            .starts_with("Corrupt articles document"));
    }

    #[test]
    fn not_found_shows_id_as_typed() {
        assert_eq!(
            TallyError::not_found("-4").to_string(),
            "Article not found: -4"
        );
    }
}
