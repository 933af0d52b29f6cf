use crate::cli::commands::{prepare, save};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::GapSplitter;
use crate::errors::AppResult;
use crate::gpx;
use crate::ui::messages::info;
use crate::ui::summary::{print_json, print_split_report};

/// Split every track of the input file at gaps longer than the threshold.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::RemoveGaps { io, gap } = cmd {
        let threshold = gap.unwrap_or(cfg.gap_threshold);
        let paths = prepare(io, cfg)?;

        if !io.json {
            info(format!(
                "Fixing file >>{}<<, removing gaps greater than {} seconds.",
                paths.input.display(),
                threshold
            ));
        }

        // Nothing is written unless every point has a valid timestamp.
        let mut doc = gpx::read_file(&paths.input)?;
        let report = GapSplitter::new(threshold).split_document(&mut doc)?;

        save(&doc, &paths, io, cfg)?;

        if io.json {
            print_json(&report)?;
        } else {
            print_split_report(&report);
        }
    }

    Ok(())
}
