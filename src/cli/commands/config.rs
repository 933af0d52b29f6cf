use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{header, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            header(format!("Current configuration ({})", path.display()));
            print!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_file(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}, defaults are used (run `gpxfix init`).",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let missing = Config::missing_fields(&content)?;
    Config::from_yaml(&content)?.validate()?;

    if missing.is_empty() {
        success("Configuration file is complete.");
    } else {
        warning(format!(
            "Missing fields (defaults are used): {}",
            missing.join(", ")
        ));
    }
    Ok(())
}

fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map_or_else(|| default_editor.clone(), str::to_string);

    if !path.exists() {
        Config::default().save_to(path)?;
    }

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            Ok(())
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            let status = Command::new(&default_editor)
                .arg(path)
                .status()
                .map_err(|e| AppError::Config(e.to_string()))?;
            if status.success() {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            } else {
                Err(AppError::Config(format!(
                    "editor '{}' exited with {}",
                    default_editor, status
                )))
            }
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using '{}'",
            editor_to_use
        ))),
    }
}
