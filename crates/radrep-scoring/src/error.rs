use thiserror::Error;

use crate::region::Region;

/// Why a region (or a pair of regions) cannot be turned into report text.
///
/// The `Display` text is the message shown to the user next to the button
/// that triggered generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Для {} заполните костную массу", .region.genitive())]
    MissingDensity { region: Region },

    #[error("Для {} заполните один из критериев: T или Z", .region.genitive())]
    MissingCriterion { region: Region },

    #[error("Для {} укажите либо T-критерий, либо Z-критерий, но не оба", .region.genitive())]
    AmbiguousCriterion { region: Region },

    #[error("Для шейки бедренной кости заполните FRAX")]
    MissingFrax,

    #[error(
        "Для шейки бедренной кости и проксимального отдела бедра в целом используйте один и тот же критерий (T или Z)"
    )]
    CriterionMismatch,
}

impl ValidationError {
    pub fn region(&self) -> Option<Region> {
        match self {
            ValidationError::MissingDensity { region }
            | ValidationError::MissingCriterion { region }
            | ValidationError::AmbiguousCriterion { region } => Some(*region),
            ValidationError::MissingFrax => Some(Region::FemoralNeck),
            ValidationError::CriterionMismatch => None,
        }
    }
}
