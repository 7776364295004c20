use clap::{Parser, Subcommand};

/// Command-line interface definition for tstamp
#[derive(Parser)]
#[command(
    name = "tstamp",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny stopwatch: record named timestamps and show the time between them",
    long_about = None
)]
pub struct Cli {
    /// Override the record store path (useful for tests or a second log)
    #[arg(global = true, long = "store", value_name = "FILE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a timestamp to the default stopwatch or to a named one
    Add {
        /// Stopwatch name (default: "default")
        name: Option<String>,
    },

    /// Show timestamps, oldest first, with optional diff columns
    ///
    /// Without names every stopwatch is shown in one sorted list.
    /// Names select stopwatches whose name contains them (see --exact).
    ///
    /// Examples:
    ///   tstamp show
    ///   tstamp show build --diff-prev
    ///   tstamp show build deploy --exact --split --diff-first
    #[command(verbatim_doc_comment)]
    Show {
        /// Stopwatch names (or name fragments) to keep
        names: Vec<String>,

        /// Print one table per stopwatch instead of one combined list
        #[arg(long)]
        split: bool,

        /// Match names exactly instead of by substring
        #[arg(long)]
        exact: bool,

        /// Show the "Since prev" column
        #[arg(long = "diff-prev", alias = "prev-diff")]
        diff_prev: bool,

        /// Show the "Since first" column
        #[arg(long = "diff-first", alias = "first-diff")]
        diff_first: bool,

        /// Show the "Since now" column (diff against the current time)
        #[arg(long = "diff-now", alias = "now-diff")]
        diff_now: bool,
    },

    /// Reset the default stopwatch or a named one
    Reset {
        /// Stopwatch name (default: "default"); with --all, a name fragment
        name: Option<String>,

        /// Reset all stopwatches (optionally only those containing NAME)
        #[arg(long)]
        all: bool,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Rename a stopwatch
    Rename {
        /// Current name
        old: String,
        /// New name (must not exist yet)
        new: String,
    },

    /// List stopwatch names
    List,

    /// Edit the record store in your editor (timestamps are stored in UTC)
    Edit {
        /// Editor to use (overrides config, $EDITOR and $VISUAL)
        #[arg(long, value_name = "EDITOR")]
        editor: Option<String>,
    },

    /// Set the display timezone (e.g. "America/New_York")
    Timezone {
        /// IANA timezone name; omit to print the current setting
        zone: Option<String>,

        /// Drop the timezone setting and use local time
        #[arg(long, conflicts_with = "zone")]
        reset: bool,
    },

    /// Print version
    Version,
}
