#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    #[error("Invalid character {character:?} at position {position} in value of cookie '{name}'")]
    InvalidValue {
        name: String,
        character: char,
        position: usize,
    },

    #[error("Generated cookie header is not a valid header value: {0}")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}
