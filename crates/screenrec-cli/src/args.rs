use clap::{Args, Parser, Subcommand};
use screenrec_core::Platform;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "screenrec")]
#[command(version)]
#[command(about = "Record, stop and play back the latest capture from the terminal")]
pub struct Cli {
    /// Log state transitions and collaborator calls to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the recorder screen (default)
    Run(Overrides),

    /// Show the resolved settings
    Status,

    /// Change and persist settings
    Config {
        #[command(flatten)]
        overrides: Overrides,

        /// Print the settings after applying changes
        #[arg(long)]
        show: bool,
    },
}

/// Settings that can be overridden from the command line
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Acquisition strategy: android (capture path event), ios (media library), other
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Directory used as the media library
    #[arg(long)]
    pub library_dir: Option<PathBuf>,

    /// File the simulated recorder reports when it stops
    #[arg(long)]
    pub capture_path: Option<PathBuf>,

    /// Seconds of playback before the player reports the end
    #[arg(long)]
    pub play_secs: Option<u64>,

    /// Show a second control bar while the soft keyboard is up
    #[arg(long)]
    pub keyboard_bar: Option<bool>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.platform.is_none()
            && self.library_dir.is_none()
            && self.capture_path.is_none()
            && self.play_secs.is_none()
            && self.keyboard_bar.is_none()
    }
}
