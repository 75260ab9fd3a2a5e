use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize structured logging to `~/.local/state/dwcm/dwcm.log`.
///
/// Diagnostics (delimiter ambiguity, unknown formats) go to the XDG state
/// directory so stdout stays clean for record output.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dwcm")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("dwcm.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dwcm_core=debug,dwcm_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("dwcm logging initialized at {}", log_file_path.display());

    Ok(())
}
