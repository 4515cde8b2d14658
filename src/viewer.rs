//! Optional interactive display of the saved chart.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Open the saved chart in the platform image viewer.
///
/// Strictly a convenience path: the PNG on disk is the contract, and callers
/// treat a failure here (headless box, no viewer installed) as a warning,
/// not an error in the run.
pub fn open<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .spawn()
        .with_context(|| format!("Failed to launch viewer for {}", path.display()))?;

    Ok(())
}
