use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] invalid_ids_engine::error::EngineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit status: 2 for bad input, 1 for everything else.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(e) if e.is_input_error() => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
