use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::features::session::RestPolicy;

#[derive(Parser)]
#[command(name = "roundtimer")]
#[command(about = "An interval workout timer for the terminal")]
#[command(long_about = "roundtimer - interval workout timer

Cycles through a list of exercises and rests, counting work and rest
intervals and rounds. The workout list is edited from the command line
and stored locally.

QUICK START:
  roundtimer run                    Start the interactive timer
  roundtimer list                   Show the workout list
  roundtimer add exercise \"Squats\"  Append an exercise
  roundtimer add rest 01:00         Append a one minute rest
  roundtimer simulate -n 1          Print the transitions of a session

OUTPUT FORMATS:
  --output pretty    Human-readable colored output
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  roundtimer <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml and the workout database
    #[arg(long, global = true, env = "ROUNDTIMER_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive timer
    ///
    /// Keys:
    ///
    ///   space      start / pause
    ///   r          reset the session
    ///   n          skip to the next item
    ///   j / k      move the cursor
    ///   enter      jump to the item under the cursor
    ///   J / K      move the item under the cursor down / up
    ///   d          delete the item under the cursor
    ///   + / -      change rounds per exercise
    ///   q / esc    quit
    Run(SessionArgs),

    /// Run a session without a terminal UI and print its transitions
    ///
    /// # Examples
    ///
    ///   roundtimer simulate                    Run the whole workout
    ///   roundtimer simulate --ticks 30         Stop after 30 seconds
    ///   roundtimer simulate -w 0:20 -n 3 -o json
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Show the workout list
    #[command(alias = "ls")]
    List,

    /// Show a single item
    Show {
        /// Item index (0-based)
        index: usize,
    },

    /// Append an exercise or rest to the list
    ///
    /// # Examples
    ///
    ///   roundtimer add exercise "Plank" --hold 0:30
    ///   roundtimer add exercise "Push-ups" --reps 10 --sets 3
    ///   roundtimer add rest 45s
    Add(ItemArgs),

    /// Replace the item at an index
    Edit(EditArgs),

    /// Remove the item at an index
    #[command(alias = "rm")]
    Remove {
        /// Item index (0-based)
        index: usize,
    },

    /// Move an item one place up or down
    #[command(alias = "mv")]
    Move {
        /// Item index (0-based)
        index: usize,

        /// Direction to move the item
        #[arg(value_enum)]
        direction: MoveDirection,
    },

    /// Replace the list with the built-in default exercises
    ResetDefaults {
        /// Confirm replacing the current list
        #[arg(long)]
        force: bool,
    },

    /// Write the list to a JSON file
    Export {
        /// Target file or directory (default: ./workouts.json)
        path: Option<PathBuf>,
    },

    /// Replace the list with the contents of a JSON file
    Import {
        /// File produced by `export`
        path: PathBuf,
    },

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   roundtimer completions bash > ~/.local/share/bash-completion/completions/roundtimer
    ///   roundtimer completions zsh > ~/.zfunc/_roundtimer
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Session settings that override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Work interval (e.g. 0:45, 45, 45s)
    #[arg(short, long, value_name = "DURATION")]
    pub work: Option<String>,

    /// Rest interval (e.g. 0:15, 15, 15s)
    #[arg(short, long, value_name = "DURATION")]
    pub rest: Option<String>,

    /// Rounds per exercise
    #[arg(short = 'n', long)]
    pub rounds: Option<u32>,

    /// When rest intervals are inserted
    #[arg(long, value_enum)]
    pub rest_policy: Option<RestPolicy>,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Stop after this many ticks (default: run until the session completes)
    #[arg(short, long)]
    pub ticks: Option<u32>,

    /// Start at this item instead of the first (0-based)
    #[arg(long, value_name = "INDEX")]
    pub from: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub item: ItemCommand,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Item index (0-based)
    pub index: usize,

    #[command(subcommand)]
    pub item: ItemCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ItemCommand {
    /// An exercise
    Exercise {
        /// Exercise name
        name: String,

        /// Instructions shown while the exercise runs
        #[arg(short, long, default_value = "")]
        description: String,

        /// Repetitions per set
        #[arg(long, default_value_t = 0)]
        reps: u32,

        /// Number of sets
        #[arg(long, default_value_t = 0)]
        sets: u32,

        /// Hold time (e.g. 0:30, 30, 30s)
        #[arg(long, default_value = "0")]
        hold: String,

        /// Image path or URL
        #[arg(long)]
        image: Option<String>,
    },

    /// A rest block
    Rest {
        /// Rest length (e.g. 1:00, 60, 1m)
        duration: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the start of the list
    Up,
    /// Towards the end of the list
    Down,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the data directory paths
    Path,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
