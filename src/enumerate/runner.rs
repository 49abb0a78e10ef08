use std::process::Command;

use tracing::debug;

use super::results::CommandResult;

/// Exit code reported when the command could not be launched at all,
/// matching the shell's "command not found" convention.
const SPAWN_FAILURE_CODE: i32 = 127;

/// Run one external command to completion and capture whatever it
/// produced.
///
/// A non-zero exit is not an error here: the enumeration tools routinely
/// exit non-zero on expected conditions (anonymous login refused, port
/// closed), and the captured text is the result the caller wants. A
/// command that cannot be launched at all is folded into the same shape,
/// with the OS error text on stderr.
///
/// No timeout is applied; a wedged tool blocks the run until it exits.
/// Child stdin is null, so tools that prompt for input fail fast instead
/// of waiting on the terminal.
pub fn run_command(program: &str, args: &[&str]) -> CommandResult {
    let mut cmd = Command::new(program);
    cmd.args(args);
    debug!("executing external command: {:?}", cmd);

    match cmd.output() {
        Ok(output) => CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            // code() is None when the child was killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
        },
        Err(err) => CommandResult {
            stdout: String::new(),
            stderr: format!("{}: {}", program, err),
            exit_code: SPAWN_FAILURE_CODE,
        },
    }
}
