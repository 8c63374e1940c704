use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown modality: {0}")]
    UnknownModality(String),

    #[error("invalid template key: {0}")]
    InvalidTemplateKey(String),
}
