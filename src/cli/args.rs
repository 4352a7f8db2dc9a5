use std::ffi::OsString;

use clap::CommandFactory;

use super::Cli;

/// Rewrite Go style single-dash long flags (`-env-file x`, `-scaling=false`)
/// into the double-dash form clap expects.
///
/// Only arguments naming a known long flag are rewritten, so short flags
/// (`-v`, `-q`) are left alone. The argument after a string flag written
/// without `=` is its value and is never rewritten, so `-command -env`
/// sets the command to `-env`. Everything after a bare `--` is passed
/// through untouched.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_flags: Vec<&str> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .chain(["help", "version"])
        .collect();
    let value_flags: Vec<&str> = command
        .get_arguments()
        .filter(|arg| arg.get_action().takes_values() && !arg.is_require_equals_set())
        .filter_map(|arg| arg.get_long())
        .collect();

    let mut out = Vec::new();
    let mut passthrough = false;
    let mut pending_value = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || pending_value {
            pending_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, dashes) = match text.strip_prefix("--") {
            Some(rest) => (rest, 2),
            None => match text.strip_prefix('-') {
                Some(rest) => (rest, 1),
                None => {
                    out.push(arg);
                    continue;
                }
            },
        };

        let (name, inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        if !long_flags.contains(&name) {
            out.push(arg);
            continue;
        }

        pending_value = !inline_value && value_flags.contains(&name);
        if dashes == 1 {
            out.push(OsString::from(format!("-{text}")));
        } else {
            out.push(arg);
        }
    }

    out
}
