use std::{
    ffi::OsString,
    io::{self, Write},
    path::PathBuf,
};

use clap::Args;

use crate::{gen::ffmpeg_run, utils, MovieError};

#[derive(Args, Debug, Clone)]
#[group(id = "movie")]
pub struct Opt {
    /// basename of the frame sequence (reads NAME.0001.png, NAME.0002.png, ...)
    #[arg(required_unless_present = "completions", display_order = 0)]
    pub name: Option<OsString>,
    /// output video path (e.g: 'movie.mp4')
    #[arg(required_unless_present = "completions", display_order = 1)]
    pub output_name: Option<PathBuf>,

    /// ffmpeg executable
    #[arg(long, default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,
    /// overwrite the output file without asking (ffmpeg -y)
    #[arg(short = 'y', long)]
    pub overwrite: bool,
    /// print the ffmpeg command instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

impl Opt {
    pub fn job(&self) -> Option<MovieJob> {
        Some(MovieJob {
            name: self.name.clone()?,
            output: self.output_name.clone()?,
        })
    }
}

/// Encoder parameters. Fixed; the command line has no way to change them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeSettings {
    frame_rate: u32,
    codec: &'static str,
    profile: &'static str,
    level: &'static str,
    pix_fmt: &'static str,
    crf: u32,
    movflags: &'static str,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        EncodeSettings {
            frame_rate: 24,
            codec: "libx264",
            // high@4.0 + yuv420p keeps the file playable in presentation software
            profile: "high",
            level: "4.0",
            pix_fmt: "yuv420p",
            crf: 18,
            movflags: "+faststart",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieJob {
    pub name: OsString,
    pub output: PathBuf,
}

impl MovieJob {
    pub fn new(name: impl Into<OsString>, output: impl Into<PathBuf>) -> Self {
        MovieJob {
            name: name.into(),
            output: output.into(),
        }
    }

    pub fn ffmpeg_args(&self, settings: &EncodeSettings, overwrite: bool) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(18);
        if overwrite {
            args.push("-y".into());
        }
        args.push("-r".into());
        args.push(settings.frame_rate.to_string().into());
        args.push("-i".into());
        args.push(utils::frame_pattern(&self.name));
        for (flag, value) in [
            ("-c:v", settings.codec),
            ("-profile:v", settings.profile),
            ("-level", settings.level),
            ("-pix_fmt", settings.pix_fmt),
        ] {
            args.push(flag.into());
            args.push(value.into());
        }
        args.push("-crf".into());
        args.push(settings.crf.to_string().into());
        args.push("-movflags".into());
        args.push(settings.movflags.into());
        args.push(self.output.clone().into_os_string());
        args
    }
}

/// Encode `job` and return the exit code to leave with.
pub fn main(job: &MovieJob, opt: &Opt) -> Result<i32, MovieError> {
    let args = job.ffmpeg_args(&EncodeSettings::default(), opt.overwrite);

    if opt.dry_run {
        let mut stdout = io::stdout().lock();
        writeln!(
            stdout,
            "{}",
            utils::command_line(opt.ffmpeg.as_os_str(), &args)
        )?;
        stdout.flush()?;
        return Ok(0);
    }

    let status = ffmpeg_run(&opt.ffmpeg, &args)?;
    if !status.success() {
        log::warn!(
            "ffmpeg failed ({}) while writing {}",
            status,
            job.output.display()
        );
    }
    Ok(utils::exit_code(status))
}
