use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown heading level: {0}")]
    HeadingLevel(String),
    #[error("Unknown display size: {0}")]
    DisplaySize(String),
}
