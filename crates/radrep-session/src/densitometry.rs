//! Densitometry panel: spine and proximal femur inputs, their generated
//! text panels, and the generation rules between them.

use radrep_compose::GeneratedText;
use radrep_compose::densitometry::{combined_text, femur_text, spine_text};
use radrep_scoring::input::KeyOutcome;
use radrep_scoring::region::check_same_criterion;
use radrep_scoring::{FieldKind, Region, RegionState};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::{OnGenerated, PanelState};

/// The two independently generated parts of a densitometry report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Lumbar spine.
    Spine,
    /// Femoral neck and total hip.
    Femur,
}

impl Section {
    pub fn of(region: Region) -> Section {
        match region {
            Region::Spine => Section::Spine,
            Region::FemoralNeck | Region::TotalHip => Section::Femur,
        }
    }
}

pub struct DensitometrySession {
    spine: RegionState,
    neck: RegionState,
    hip: RegionState,
    spine_panel: Option<GeneratedText>,
    femur_panel: Option<GeneratedText>,
    generated: bool,
    on_generated: Option<OnGenerated>,
}

impl Default for DensitometrySession {
    fn default() -> Self {
        Self::new()
    }
}

impl DensitometrySession {
    pub fn new() -> Self {
        Self {
            spine: RegionState::new(Region::Spine),
            neck: RegionState::new(Region::FemoralNeck),
            hip: RegionState::new(Region::TotalHip),
            spine_panel: None,
            femur_panel: None,
            generated: false,
            on_generated: None,
        }
    }

    pub fn with_callback(on_generated: OnGenerated) -> Self {
        Self {
            on_generated: Some(on_generated),
            ..Self::new()
        }
    }

    pub fn region(&self, region: Region) -> &RegionState {
        match region {
            Region::Spine => &self.spine,
            Region::FemoralNeck => &self.neck,
            Region::TotalHip => &self.hip,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionState {
        self.generated = false;
        match region {
            Region::Spine => &mut self.spine,
            Region::FemoralNeck => &mut self.neck,
            Region::TotalHip => &mut self.hip,
        }
    }

    pub fn set_text(&mut self, region: Region, kind: FieldKind, raw: impl Into<String>) -> bool {
        self.region_mut(region).set_text(kind, raw)
    }

    pub fn type_char(&mut self, region: Region, kind: FieldKind, ch: char) -> Option<KeyOutcome> {
        self.region_mut(region).type_char(kind, ch)
    }

    pub fn paste(
        &mut self,
        region: Region,
        kind: FieldKind,
        pasted: &str,
    ) -> Option<Result<(), &'static str>> {
        self.region_mut(region).paste(kind, pasted)
    }

    pub fn clear_section(&mut self, section: Section) {
        match section {
            Section::Spine => self.spine.clear(),
            Section::Femur => {
                self.neck.clear();
                self.hip.clear();
            }
        }
    }

    pub fn panel(&self, section: Section) -> Option<&GeneratedText> {
        match section {
            Section::Spine => self.spine_panel.as_ref(),
            Section::Femur => self.femur_panel.as_ref(),
        }
    }

    /// Full text shown in a section's panel, empty if nothing was generated.
    pub fn panel_text(&self, section: Section) -> String {
        self.panel(section)
            .map(GeneratedText::full_text)
            .unwrap_or_default()
    }

    /// Validate and compose one section without touching any state.
    pub fn compose(&self, section: Section) -> Result<GeneratedText, SessionError> {
        match section {
            Section::Spine => {
                let spine = self.spine.validate()?;
                Ok(spine_text(&spine)?)
            }
            Section::Femur => {
                let neck = self.neck.validate()?;
                let hip = self.hip.validate()?;
                Ok(femur_text(&neck, &hip)?)
            }
        }
    }

    /// Generate one section.
    ///
    /// On success the section's panel shows the new text, its input fields
    /// are cleared, and the other section's panel is emptied. On failure
    /// nothing changes.
    pub fn generate(&mut self, section: Section) -> Result<GeneratedText, SessionError> {
        let text = self.compose(section)?;
        match section {
            Section::Spine => {
                self.spine_panel = Some(text.clone());
                self.femur_panel = None;
            }
            Section::Femur => {
                self.femur_panel = Some(text.clone());
                self.spine_panel = None;
            }
        }
        self.clear_section(section);
        tracing::info!(?section, "densitometry section generated");
        self.finish(&text);
        Ok(text)
    }

    /// Generate both sections into their panels.
    ///
    /// Both sections must validate and the femoral neck and total hip must
    /// share a criterion. Inputs and panels are all kept.
    pub fn generate_all(&mut self) -> Result<GeneratedText, SessionError> {
        let spine = self.spine.validate()?;
        let neck = self.neck.validate()?;
        let hip = self.hip.validate()?;
        check_same_criterion(&neck, &hip)?;

        let spine = spine_text(&spine)?;
        let femur = femur_text(&neck, &hip)?;
        let text = combined_text(&spine, &femur);
        self.spine_panel = Some(spine);
        self.femur_panel = Some(femur);
        tracing::info!("densitometry report generated");
        self.finish(&text);
        Ok(text)
    }

    fn finish(&mut self, text: &GeneratedText) {
        self.generated = true;
        if let Some(callback) = self.on_generated.as_mut() {
            callback(text);
        }
    }

    fn panels(&self) -> impl Iterator<Item = &GeneratedText> {
        self.spine_panel.iter().chain(self.femur_panel.iter())
    }

    /// Descriptions of the generated panels, spine first.
    pub fn description_text(&self) -> String {
        join_nonempty(self.panels().map(|p| p.description.as_str()))
    }

    pub fn conclusion_text(&self) -> String {
        join_nonempty(self.panels().map(|p| p.conclusion.as_str()))
    }

    /// Both panels' full text, separated by a blank line.
    pub fn generated_text(&self) -> String {
        let texts = [
            self.panel_text(Section::Spine),
            self.panel_text(Section::Femur),
        ];
        join_nonempty(texts.iter().map(String::as_str))
    }

    pub fn state(&self) -> PanelState {
        let regions = [&self.spine, &self.neck, &self.hip];
        if self.generated {
            PanelState::Generated
        } else if regions.iter().all(|r| r.is_empty()) {
            PanelState::Empty
        } else if self.spine.validate().is_ok()
            || (self.neck.validate().is_ok() && self.hip.validate().is_ok())
        {
            PanelState::Valid
        } else {
            PanelState::PartiallyFilled
        }
    }
}

fn join_nonempty<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
