use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use radrep_core::catalog_paths;
use radrep_session::{Clipboard, PasteState, Workspace};
use radrep_session::registry::PanelContext;
use radrep_storage::{InMemoryStore, ReportStore, catalogs};

use crate::config::AppConfig;

/// Load every catalog under `catalog_dir` into a panel context. Missing or
/// broken files leave the matching catalog empty.
pub fn load_context(catalog_dir: &Path) -> PanelContext {
    let mut store = InMemoryStore::with_default_templates();
    for template in catalogs::load_templates(catalog_dir) {
        store.save_template(template);
    }

    let presets_path = catalog_paths::constructor_presets(catalog_dir);
    let mut context = PanelContext::new(Rc::new(RefCell::new(store)));
    context.studies = catalogs::load_study_catalog(catalog_dir);
    context.presets = catalogs::load_presets(&presets_path);
    context.presets_path = Some(presets_path);
    context.mammography = catalogs::load_mammography_catalog(catalog_dir);
    context
}

/// Build the workspace and open the configured start-up panel.
pub fn build_workspace(config: &AppConfig, catalog_dir: &Path) -> eyre::Result<Workspace> {
    let mut workspace = Workspace::new(load_context(catalog_dir));
    for plugin in workspace.plugins() {
        tracing::info!(
            modality = %plugin.modality(),
            name = plugin.name(),
            "plugin registered"
        );
    }
    workspace.switch_modality(config.start_modality)?;
    Ok(workspace)
}

/// Run the paste sequence of the latest generation with the configured poll
/// interval and timeout.
pub async fn drive_pastes(
    workspace: &mut Workspace,
    clipboard: &mut dyn Clipboard,
    config: &AppConfig,
) -> PasteState {
    workspace
        .run_paste_sequence(clipboard, config.poll_interval(), config.paste_timeout())
        .await
}
