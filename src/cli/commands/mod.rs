pub mod add_timestamps;
pub mod config;
pub mod init;
pub mod remove_gaps;

use crate::cli::parser::OutputArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::gpx::{self, Document};
use crate::ui::messages::{info, success};
use crate::utils::path::{default_output_path, ensure_writable, expand_tilde};
use std::path::PathBuf;

/// Input and output paths of a rewriting command.
pub(crate) struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Resolve paths and make sure the output may be written before any work is done.
pub(crate) fn prepare(io: &OutputArgs, cfg: &Config) -> AppResult<Paths> {
    let input = expand_tilde(&io.input);
    let output = match &io.output {
        Some(o) => expand_tilde(o),
        None => default_output_path(&input, &cfg.output_prefix),
    };

    if !io.dry_run {
        ensure_writable(&output, io.force)?;
    }

    Ok(Paths { input, output })
}

/// Write the fixed document, unless this is a dry run.
pub(crate) fn save(doc: &Document, paths: &Paths, io: &OutputArgs, cfg: &Config) -> AppResult<()> {
    if io.dry_run {
        if !io.json {
            info("Dry run: no file written.");
        }
        return Ok(());
    }

    gpx::write_file(doc, &paths.output, cfg.indent)?;
    if !io.json {
        success(format!(
            "Saving fixed file as >>{}<<.",
            paths.output.display()
        ));
    }
    Ok(())
}
