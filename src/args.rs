use clap::{ArgAction, Parser};
use clap_complete::Shell;
use log::LevelFilter;

use crate::*;

/// Render a numbered PNG sequence to an H.264 mp4 with ffmpeg
#[derive(Parser, Clone, Debug)]
#[command(
    name = "make-movie",
    version,
    override_usage = "make-movie [OPTIONS] <NAME> <OUTPUT_NAME>\n       make-movie --completions <SHELL>"
)]
pub struct Opt {
    #[command(flatten)]
    pub movie: gen::movie::Opt,

    /// more log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// print shell completions to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
