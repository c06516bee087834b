use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("can't start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl MovieError {
    /// Exit code a shell would report for the same failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MovieError::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => 127,
            MovieError::Spawn { .. } => 126,
            MovieError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_maps_to_127() {
        let e = MovieError::Spawn {
            program: PathBuf::from("ffmpeg"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(e.exit_code(), 127);
        assert!(e.to_string().starts_with("can't start ffmpeg"));
    }

    #[test]
    fn other_spawn_errors_map_to_126() {
        let e = MovieError::Spawn {
            program: PathBuf::from("./ffmpeg"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(e.exit_code(), 126);
    }
}
