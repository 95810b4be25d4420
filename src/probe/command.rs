//! Process execution for version probes.
//!
//! Candidates are executed directly from their argument vector, without a
//! shell, so that a missing executable surfaces as a spawn failure rather
//! than a shell's "command not found" exit code.
//!
//! Captured output has CSI escape sequences removed while it is still raw
//! bytes, since an 8-bit CSI introducer is not valid UTF-8.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::ansi::strip_ansi_bytes;

/// Interval between exit checks while waiting on a child with a timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output, escape sequences removed.
    pub stdout: String,

    /// Standard error, escape sequences removed.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed after exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Create a result for a command killed at its deadline.
    pub fn timed_out(duration: Duration) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            success: false,
            timed_out: true,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Kill the child if it runs longer than this (None = wait forever).
    pub timeout: Option<Duration>,
}

/// Something that can run a command's argument vector.
///
/// The probe runner goes through this trait so tests can script outcomes
/// without spawning real processes.
pub trait CommandRunner {
    /// Run `argv` to completion. An `Err` means the process could not be spawned.
    fn run(&self, argv: &[String], options: &CommandOptions) -> io::Result<CommandResult>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, argv: &[String], options: &CommandOptions) -> io::Result<CommandResult> {
        (**self).run(argv, options)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String], options: &CommandOptions) -> io::Result<CommandResult> {
        execute(argv, options)
    }
}

/// Execute a command, capturing stdout and stderr.
///
/// Stdin is closed so tools that would otherwise wait for input exit
/// immediately. Both pipes are drained on helper threads while the child
/// runs, which keeps a verbose child from blocking on a full pipe.
pub fn execute(argv: &[String], options: &CommandOptions) -> io::Result<CommandResult> {
    let start = Instant::now();

    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let stdout_handle = child.stdout.take().map(spawn_reader);
    let stderr_handle = child.stderr.take().map(spawn_reader);

    let status = match options.timeout {
        Some(timeout) => wait_with_deadline(&mut child, timeout)?,
        None => Some(child.wait()?),
    };

    let duration = start.elapsed();

    let Some(status) = status else {
        // Reader threads are left to finish on their own; a grandchild may
        // still hold the pipes open.
        tracing::debug!("Command {:?} timed out after {:?}", argv, duration);
        return Ok(CommandResult::timed_out(duration));
    };

    let stdout = join_reader(stdout_handle);
    let stderr = join_reader(stderr_handle);

    if status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Wait for `child` to exit, killing it once `timeout` has elapsed.
///
/// Returns `None` if the child was killed. A timeout too large to express
/// as an `Instant` waits without a deadline.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> io::Result<Option<ExitStatus>> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        return child.wait().map(Some);
    };

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }

        if Instant::now() >= deadline {
            // The child may exit between try_wait and kill.
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    let bytes = handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();
    strip_ansi_bytes(&bytes)
}
