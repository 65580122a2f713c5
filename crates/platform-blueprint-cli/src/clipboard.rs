use platform_blueprint_core::{BlueprintError, Result};
use tracing::debug;

/// Places `text` on the system clipboard.
///
/// Fails with `BlueprintError::Clipboard` when no clipboard service is reachable
/// (e.g. a headless session); use `--stdout` there instead.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| BlueprintError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| BlueprintError::Clipboard(e.to_string()))?;
    debug!(bytes = text.len(), "clipboard text set");
    Ok(())
}
