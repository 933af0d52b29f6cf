use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for gpxfix
/// CLI application to repair GPX track recordings
#[derive(Parser, Debug)]
#[command(
    name = "gpxfix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove recording gaps from GPX tracks and backfill missing timestamps",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the commands that rewrite a GPX file.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Name of the gpx file to process
    pub input: String,

    /// Output file (default: <output_prefix><input> next to the input)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Overwrite the output file if it already exists
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Process the file but do not write anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Split track segments wherever the time between two points exceeds the gap
    RemoveGaps {
        #[command(flatten)]
        io: OutputArgs,

        /// Gap duration in seconds (default from config, 15)
        #[arg(short = 'g', long = "gap", value_name = "SECONDS")]
        gap: Option<u32>,
    },

    /// Add evenly spaced timestamps to every track point
    AddTimestamps {
        #[command(flatten)]
        io: OutputArgs,

        /// Seconds between two consecutive points (default from config, 15)
        #[arg(short = 'i', long = "interval", value_name = "SECONDS")]
        interval: Option<u32>,

        /// First timestamp, e.g. 2024-05-01T08:00:00.000Z (default: now minus one day)
        #[arg(long = "start", value_name = "TIME")]
        start: Option<String>,
    },
}
