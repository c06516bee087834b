use std::{
    ffi::{OsStr, OsString},
    process::ExitStatus,
};

/// ffmpeg image2 pattern for `name.0001.png`, `name.0002.png`, ...
pub fn frame_pattern(name: &OsStr) -> OsString {
    let mut pattern = name.to_os_string();
    pattern.push(".%04d.png");
    pattern
}

/// Exit code to forward for a finished child.
///
/// On Unix a child killed by a signal has no code; report `128 + signal`
/// the way shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Quote a single argument for display so it can be pasted into sh.
pub fn shell_quote(arg: &OsStr) -> String {
    let s = arg.to_string_lossy();
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "%+-./:=_,@".contains(c));
    if plain {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

pub fn command_line<I, S>(program: &OsStr, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut line = shell_quote(program);
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg.as_ref()));
    }
    line
}
