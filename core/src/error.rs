use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Autosave interval must be a positive number of milliseconds")]
    InvalidAutosaveInterval,

    #[error("Unknown upgrade '{name}'")]
    UnknownUpgrade { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;
