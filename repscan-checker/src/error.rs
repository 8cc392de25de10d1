use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Score source failed: {0}")]
    ScoreSource(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;
