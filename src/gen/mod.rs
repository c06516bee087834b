use std::{
    ffi::OsStr,
    path::Path,
    process::{Command, ExitStatus},
};

use crate::{utils, MovieError};

pub mod movie;

/// Run ffmpeg with inherited stdio and wait for it.
///
/// The child's output is not captured, so its diagnostics reach the
/// terminal unmodified.
pub fn ffmpeg_run<I, S>(program: &Path, args: I) -> Result<ExitStatus, MovieError>
where
    I: IntoIterator<Item = S> + Clone,
    S: AsRef<OsStr>,
{
    log::info!(
        "{}",
        utils::command_line(program.as_os_str(), args.clone())
    );
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| MovieError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    log::debug!("{} exited: {}", program.display(), status);
    Ok(status)
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn forwards_child_status() {
        let status = ffmpeg_run(Path::new("sh"), ["-c", "exit 4"]).unwrap();
        assert_eq!(utils::exit_code(status), 4);

        let status = ffmpeg_run(Path::new("true"), Vec::<String>::new()).unwrap();
        assert!(status.success());
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let program = PathBuf::from("/nonexistent/ffmpeg");
        match ffmpeg_run(&program, ["-version"]) {
            Err(e @ MovieError::Spawn { .. }) => assert_eq!(e.exit_code(), 127),
            other => panic!("expected spawn error, got {:?}", other),
        }
    }
}
