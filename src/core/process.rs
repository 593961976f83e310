//! Blocking subprocess execution with a timeout.
//!
//! Used for every `op` and `git` invocation. Output is captured, never
//! streamed to the terminal.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::{Result, ToolError};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct Captured {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run `program args...` and wait at most `timeout`.
///
/// # Errors
///
/// `ToolError::NotInstalled` if the program cannot be spawned,
/// `ToolError::Timeout` if it does not exit in time (the child is killed).
/// A non-zero exit is NOT an error here; check `Captured::success`.
pub fn run(program: &str, args: &[&str], timeout: Duration) -> Result<Captured> {
    let shown = describe(program, args);
    debug!(command = %shown, "running");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|_| ToolError::NotInstalled(program.to_string()))?;

    // Drain pipes on threads so a chatty child cannot block on a full pipe.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let started = Instant::now();
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if started.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(ToolError::Timeout {
                command: shown,
                secs: timeout.as_secs(),
            }
            .into());
        }
        thread::sleep(POLL_INTERVAL);
    };

    let captured = Captured {
        success: status.success(),
        stdout: join(stdout),
        stderr: join(stderr),
    };
    trace!(command = %shown, success = captured.success, "finished");
    Ok(captured)
}

/// Run and require a zero exit status.
///
/// # Errors
///
/// As [`run`], plus `ToolError::Failed` carrying stderr on non-zero exit.
pub fn run_checked(program: &str, args: &[&str], timeout: Duration) -> Result<Captured> {
    let captured = run(program, args, timeout)?;
    if !captured.success {
        return Err(ToolError::Failed {
            command: describe(program, args),
            stderr: captured.stderr.trim().to_string(),
        }
        .into());
    }
    Ok(captured)
}

/// Human-readable command line with `[password]=` values masked.
pub fn describe(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    for arg in args {
        match arg.split_once("[password]=") {
            Some((field, _)) => parts.push(format!("{}[password]=***", field)),
            None => parts.push(arg.to_string()),
        }
    }
    parts.join(" ")
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}
