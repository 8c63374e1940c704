//! Modality plugins and the panels they create.
//!
//! Plugins are statically registered; [`all_plugins`] lists them in the
//! order the modality switcher shows them.

use std::path::PathBuf;

use radrep_core::models::catalog::{Preset, StudyCatalog};
use radrep_core::models::mammography::MammographyCatalog;
use radrep_core::models::modality::Modality;

use crate::constructor::ConstructorSession;
use crate::densitometry::DensitometrySession;
use crate::mammography::MammographySession;
use crate::substitution::{SharedStore, SubstitutionPanel};
use crate::{OnGenerated, PanelState};

/// Everything a plugin may need to build a panel.
pub struct PanelContext {
    pub store: SharedStore,
    pub studies: StudyCatalog,
    pub presets: Vec<Preset>,
    pub presets_path: Option<PathBuf>,
    pub mammography: MammographyCatalog,
}

impl PanelContext {
    /// Empty catalogs over the given store.
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            studies: StudyCatalog::default(),
            presets: Vec::new(),
            presets_path: None,
            mammography: MammographyCatalog::default(),
        }
    }
}

/// Trait implemented by each modality's report generator.
pub trait ModalityPlugin {
    fn modality(&self) -> Modality;

    /// Label on the modality switcher.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Whether a generation starts the description-then-conclusion paste
    /// sequence on the clipboard.
    fn tracks_pastes(&self) -> bool {
        false
    }

    /// Build a fresh panel. `on_generated` receives every generated pair.
    fn create_panel(&self, context: &PanelContext, on_generated: OnGenerated) -> Panel;
}

pub enum Panel {
    Substitution(SubstitutionPanel),
    Constructor(ConstructorSession),
    Mammography(MammographySession),
    Densitometry(DensitometrySession),
}

impl Panel {
    pub fn description_text(&self) -> String {
        match self {
            Panel::Substitution(p) => p.description_text(),
            Panel::Constructor(p) => p.description_text(),
            Panel::Mammography(p) => p.description_text(),
            Panel::Densitometry(p) => p.description_text(),
        }
    }

    pub fn conclusion_text(&self) -> String {
        match self {
            Panel::Substitution(p) => p.conclusion_text(),
            Panel::Constructor(p) => p.conclusion_text(),
            Panel::Mammography(p) => p.conclusion_text(),
            Panel::Densitometry(p) => p.conclusion_text(),
        }
    }

    pub fn state(&self) -> PanelState {
        match self {
            Panel::Substitution(p) => p.state(),
            Panel::Constructor(p) => p.state(),
            Panel::Mammography(p) => p.state(),
            Panel::Densitometry(p) => p.state(),
        }
    }

    pub fn as_substitution_mut(&mut self) -> Option<&mut SubstitutionPanel> {
        match self {
            Panel::Substitution(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_constructor_mut(&mut self) -> Option<&mut ConstructorSession> {
        match self {
            Panel::Constructor(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_mammography_mut(&mut self) -> Option<&mut MammographySession> {
        match self {
            Panel::Mammography(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_densitometry_mut(&mut self) -> Option<&mut DensitometrySession> {
        match self {
            Panel::Densitometry(p) => Some(p),
            _ => None,
        }
    }
}

pub struct XrayTemplatesPlugin;

impl ModalityPlugin for XrayTemplatesPlugin {
    fn modality(&self) -> Modality {
        Modality::Xray
    }

    fn name(&self) -> &str {
        "Рентген: шаблоны"
    }

    fn description(&self) -> &str {
        "Обработка текста заключения по шаблонам замен"
    }

    fn create_panel(&self, context: &PanelContext, on_generated: OnGenerated) -> Panel {
        let mut panel = SubstitutionPanel::new(Modality::Xray, context.store.clone());
        panel.set_on_generated(on_generated);
        Panel::Substitution(panel)
    }
}

pub struct XrayConstructorPlugin;

impl ModalityPlugin for XrayConstructorPlugin {
    fn modality(&self) -> Modality {
        Modality::XrayConstructor
    }

    fn name(&self) -> &str {
        "Рентген"
    }

    fn description(&self) -> &str {
        "Генерация структурированных описаний и заключений по рентгеновским снимкам"
    }

    fn create_panel(&self, context: &PanelContext, on_generated: OnGenerated) -> Panel {
        let mut session = ConstructorSession::new(
            context.studies.clone(),
            context.presets.clone(),
            context.presets_path.clone(),
        );
        session.set_on_generated(on_generated);
        Panel::Constructor(session)
    }
}

pub struct MammographyPlugin;

impl ModalityPlugin for MammographyPlugin {
    fn modality(&self) -> Modality {
        Modality::Mammography
    }

    fn name(&self) -> &str {
        "Маммография"
    }

    fn description(&self) -> &str {
        "Плагин для работы с маммографическими исследованиями"
    }

    fn create_panel(&self, context: &PanelContext, on_generated: OnGenerated) -> Panel {
        let mut session = MammographySession::new(context.mammography.clone());
        session.set_on_generated(on_generated);
        Panel::Mammography(session)
    }
}

pub struct DensitometryPlugin;

impl ModalityPlugin for DensitometryPlugin {
    fn modality(&self) -> Modality {
        Modality::Densitometry
    }

    fn name(&self) -> &str {
        "Денситометрия"
    }

    fn description(&self) -> &str {
        "Плагин для работы с денситометрическими исследованиями"
    }

    fn tracks_pastes(&self) -> bool {
        true
    }

    fn create_panel(&self, _context: &PanelContext, on_generated: OnGenerated) -> Panel {
        Panel::Densitometry(DensitometrySession::with_callback(on_generated))
    }
}

/// Return all registered plugins.
pub fn all_plugins() -> Vec<Box<dyn ModalityPlugin>> {
    vec![
        Box::new(XrayConstructorPlugin),
        Box::new(MammographyPlugin),
        Box::new(DensitometryPlugin),
        Box::new(XrayTemplatesPlugin),
    ]
}

/// Look up a plugin by modality.
pub fn get_plugin(modality: Modality) -> Option<Box<dyn ModalityPlugin>> {
    all_plugins().into_iter().find(|p| p.modality() == modality)
}
