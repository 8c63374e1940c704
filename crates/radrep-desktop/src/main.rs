use eyre::Result;

use radrep_desktop::{bootstrap, config};
use radrep_session::MemoryClipboard;
use radrep_storage::ReportStore;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::load_config()?;
    let catalog_dir = config.catalog_dir()?;
    tracing::info!(
        catalog_dir = %catalog_dir.display(),
        poll_interval_ms = config.poll_interval_ms,
        paste_timeout_secs = config.paste_timeout_secs,
        "starting"
    );

    let mut workspace = bootstrap::build_workspace(&config, &catalog_dir)?;
    let store = workspace.store();
    let templates = store.borrow().list_templates().len();
    tracing::info!(
        modality = ?workspace.active_modality(),
        templates,
        "workspace ready"
    );

    let mut clipboard = MemoryClipboard::new();
    let state = bootstrap::drive_pastes(&mut workspace, &mut clipboard, &config).await;
    tracing::info!(?state, "paste sequence finished");

    Ok(())
}
