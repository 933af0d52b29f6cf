use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration file at `path`. An existing file is
/// left untouched.
pub fn handle(path: &Path) -> AppResult<()> {
    if path.exists() {
        info(format!(
            "Configuration file already exists: {}",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save_to(path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
