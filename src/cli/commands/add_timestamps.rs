use crate::cli::commands::{prepare, save};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TimestampSynthesizer;
use crate::core::stamp::default_start;
use crate::errors::{AppError, AppResult};
use crate::gpx;
use crate::models::StampReport;
use crate::ui::messages::{info, warning};
use crate::ui::summary::{print_json, print_stamp_report};
use crate::utils::time::{GPX_TIME_FORMAT, format_gpx_time, parse_gpx_time};

/// Backfill timestamps on every track point of the input file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddTimestamps {
        io,
        interval,
        start,
    } = cmd
    {
        //
        // 1. Validate user values
        //
        let interval = interval.unwrap_or(cfg.timestamp_interval);
        if interval == 0 {
            return Err(AppError::InvalidArgument(
                "--interval must be greater than 0".into(),
            ));
        }

        let start = match start {
            Some(s) => parse_gpx_time(s).ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "--start '{}' does not match {}",
                    s, GPX_TIME_FORMAT
                ))
            })?,
            None => default_start(),
        };

        let paths = prepare(io, cfg)?;

        if !io.json {
            info(format!(
                "Fixing file >>{}<<, adding timestamps.",
                paths.input.display()
            ));
        }

        //
        // 2. Stamp
        //
        let mut doc = gpx::read_file(&paths.input)?;

        let already = doc.timed_point_count();
        if already > 0 {
            warning(format!(
                "{} points already have a timestamp and will get a second one.",
                already
            ));
        }

        let points = TimestampSynthesizer::starting_at(interval, start).assign(&mut doc)?;

        //
        // 3. Save and report
        //
        save(&doc, &paths, io, cfg)?;

        let report = StampReport {
            interval,
            start: format_gpx_time(start),
            points,
        };

        if io.json {
            print_json(&report)?;
        } else {
            print_stamp_report(&report);
        }
    }

    Ok(())
}
