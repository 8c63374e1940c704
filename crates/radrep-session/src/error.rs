use radrep_compose::error::ComposeError;
use radrep_core::models::modality::Modality;
use radrep_scoring::ValidationError;
use radrep_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Incomplete or inconsistent clinical input. `Display` is the message
    /// shown next to the button that triggered generation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("no plugin registered for {0}")]
    NoPlugin(Modality),

    #[error("no study selected")]
    NoStudySelected,

    #[error("unknown study: {0}")]
    UnknownStudy(String),

    #[error("unknown pathology '{pathology_id}' in study '{study_id}'")]
    UnknownPathology {
        study_id: String,
        pathology_id: String,
    },

    #[error("no preset at index {0}")]
    NoSuchPreset(usize),

    #[error("preset name is empty")]
    EmptyPresetName,
}
