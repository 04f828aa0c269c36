use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolyevoError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Length mismatch: {inputs} inputs vs {outputs} outputs")]
    LengthMismatch { inputs: usize, outputs: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Collaborator error: {0}")]
    Collaborator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolyevoError>;
