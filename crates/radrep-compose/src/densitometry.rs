//! Densitometry report phrasing for the spine and the proximal femur.

use radrep_scoring::field::{FormatClass, format};
use radrep_scoring::region::RegionReading;
use serde::Serialize;
use tracing::debug;

use crate::error::ComposeError;
use crate::render::render_template;
use crate::text::GeneratedText;

const SPINE_DESCRIPTION: &str = "Поясничный отдел позвоночника. Поясничные позвонки: L1–L4. \
Среднее значение МПК составило {{ spine.density }} г/см². {{ spine.criterion }} – {{ spine.score }}";

const SPINE_CONCLUSION: &str = "Заключение. Позвоночник - {{ spine.diagnosis }}";

const FEMUR_DESCRIPTION: &str = "Проксимальный отдел бедра. Бедренная кость: левая.
Шейка бедренной кости (femoral neck). Значение МПК составило {{ neck.density }} г/см². \
{{ neck.criterion }} – {{ neck.score }}. FRAX – {{ neck.frax }}%
Проксимальный отдел бедра в целом (total hip). Значение МПК составило {{ hip.density }} г/см². \
{{ hip.criterion }} – {{ hip.score }}.";

const FEMUR_CONCLUSION: &str = "Заключение: Проксимальный отдел бедра в целом: {{ hip.diagnosis }}. \
Шейка бедренной кости: {{ neck.diagnosis }}.";

/// Preformatted values of one region, as the templates see them.
#[derive(Debug, Serialize)]
struct RegionView {
    density: String,
    criterion: &'static str,
    score: String,
    frax: String,
    diagnosis: &'static str,
}

impl From<&RegionReading> for RegionView {
    fn from(reading: &RegionReading) -> Self {
        Self {
            density: format(reading.density, FormatClass::Density),
            criterion: reading.choice.criterion.label(),
            score: format(reading.choice.value, FormatClass::Criterion),
            frax: reading
                .frax
                .map(|v| format(v, FormatClass::Frax))
                .unwrap_or_default(),
            diagnosis: reading.diagnosis.label(),
        }
    }
}

#[derive(Serialize)]
struct SpineContext {
    spine: RegionView,
}

#[derive(Serialize)]
struct FemurContext {
    neck: RegionView,
    hip: RegionView,
}

/// Lumbar spine text from a validated spine reading.
pub fn spine_text(spine: &RegionReading) -> Result<GeneratedText, ComposeError> {
    let context = SpineContext {
        spine: spine.into(),
    };
    let text = GeneratedText {
        description: render_template("spine_description", SPINE_DESCRIPTION, &context)?,
        conclusion: render_template("spine_conclusion", SPINE_CONCLUSION, &context)?,
    };
    debug!(diagnosis = %spine.diagnosis, "spine text composed");
    Ok(text)
}

/// Proximal femur text from validated femoral neck and total hip readings.
pub fn femur_text(
    neck: &RegionReading,
    hip: &RegionReading,
) -> Result<GeneratedText, ComposeError> {
    let context = FemurContext {
        neck: neck.into(),
        hip: hip.into(),
    };
    let text = GeneratedText {
        description: render_template("femur_description", FEMUR_DESCRIPTION, &context)?,
        conclusion: render_template("femur_conclusion", FEMUR_CONCLUSION, &context)?,
    };
    debug!(
        neck = %neck.diagnosis,
        hip = %hip.diagnosis,
        "femur text composed"
    );
    Ok(text)
}

/// Spine followed by femur, each part separated by a blank line.
pub fn combined_text(spine: &GeneratedText, femur: &GeneratedText) -> GeneratedText {
    GeneratedText {
        description: format!("{}\n\n{}", spine.description, femur.description),
        conclusion: format!("{}\n\n{}", spine.conclusion, femur.conclusion),
    }
}
