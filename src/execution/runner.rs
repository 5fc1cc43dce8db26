//! Command runner - executes shell scripts for the external toolchain

use crate::core::error::{ScaffoldError, ScaffoldResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Captured output of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for running external commands - allows for different implementations
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `script` in `working_dir`
    ///
    /// The script may hold several newline-separated statements; they share
    /// one shell session, so a `cd` on one line applies to the next.
    async fn execute(&self, script: &str, working_dir: &Path) -> ScaffoldResult<CommandOutput>;
}

/// Runs scripts through `<shell> -c`
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    /// Shell executable (e.g., "sh", "/bin/bash")
    shell: String,

    /// Timeout for a whole script; `None` waits forever
    timeout_secs: Option<u64>,
}

impl ShellCommandRunner {
    pub fn new(shell: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            shell: shell.into(),
            timeout_secs,
        }
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self::new("sh", Some(600))
    }
}

/// First line of a script, for error messages
fn summarize(script: &str) -> String {
    let mut lines = script.lines().map(str::trim).filter(|l| !l.is_empty());
    match (lines.next(), lines.next()) {
        (Some(first), Some(_)) => format!("{} ...", first),
        (Some(first), None) => first.to_string(),
        _ => String::new(),
    }
}

#[cfg(unix)]
fn kill_process_group(pgid: u32) {
    // SAFETY: killpg only sends a signal; no memory is shared with the callee
    let rc = unsafe { libc::killpg(pgid as libc::pid_t, libc::SIGKILL) };
    if rc != 0 {
        debug!(
            "killpg({}) failed: {}",
            pgid,
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(unix))]
fn kill_process_group(_pgid: u32) {}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn execute(&self, script: &str, working_dir: &Path) -> ScaffoldResult<CommandOutput> {
        let command = summarize(script);
        debug!("Running in {}:\n{}", working_dir.display(), script);

        let mut shell = Command::new(&self.shell);
        shell
            .arg("-c")
            .arg(script)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        // Own process group, so a timeout can take down everything the script started
        #[cfg(unix)]
        shell.process_group(0);

        let child = shell.spawn().map_err(|e| ScaffoldError::Spawn {
            command: command.clone(),
            source: e,
        })?;
        let pid = child.id();

        let result = match self.timeout_secs {
            Some(secs) => match timeout(Duration::from_secs(secs), child.wait_with_output()).await {
                Ok(result) => result,
                Err(_) => {
                    // The shell itself was killed when its future was dropped
                    if let Some(pid) = pid {
                        kill_process_group(pid);
                    }
                    warn!("`{}` timed out after {}s", command, secs);
                    return Err(ScaffoldError::Timeout { command, secs });
                }
            },
            None => child.wait_with_output().await,
        };

        let output = result.map_err(|e| ScaffoldError::Spawn {
            command: command.clone(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        // Check exit code
        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            warn!("`{}` exited with code {}: {}", command, code, stderr.trim());
            return Err(ScaffoldError::ExternalCommand {
                command,
                code,
                stderr: stderr.trim().to_string(),
            });
        }

        debug!("`{}` finished with {} bytes of output", command, stdout.len());
        Ok(CommandOutput { stdout, stderr })
    }
}
