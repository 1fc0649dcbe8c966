//! Synchronous external tool execution.
//!
//! Everything the splitter does with media files goes through external
//! MKVToolNix binaries. This module runs one tool invocation to
//! completion and hands back both output streams, or a structured
//! failure carrying them for diagnosis.
//!
//! `Command::output()` drains stdout and stderr before waiting on the
//! child, which avoids the classic deadlock of waiting on a process
//! that is blocked writing into a full pipe.

use std::io;
use std::process::Command;

use thiserror::Error;

/// Errors from running an external tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The tool could not be started at all (missing binary, etc.).
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but exited non-zero.
    #[error("{tool} failed with exit code {exit_code}\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    Failed {
        tool: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
}

/// Captured output streams of a successful tool run.
#[derive(Debug)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run an external tool synchronously and capture its output.
///
/// Blocks until the process exits. A non-zero exit code becomes
/// [`ToolError::Failed`] with both streams attached.
pub fn run_tool(tool: &str, args: &[String]) -> Result<ToolOutput, ToolError> {
    tracing::debug!("Running: {} {}", tool, args.join(" "));

    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|e| ToolError::Spawn {
            tool: tool.to_string(),
            source: e,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout,
            stderr,
        });
    }

    Ok(ToolOutput { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_run_captures_stdout() {
        let output = run_tool("sh", &["-c".into(), "echo hello".into()]).unwrap();
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn nonzero_exit_carries_both_streams() {
        let err = run_tool(
            "sh",
            &["-c".into(), "echo out; echo err >&2; exit 3".into()],
        )
        .unwrap_err();

        match err {
            ToolError::Failed {
                tool,
                exit_code,
                stdout,
                stderr,
            } => {
                assert_eq!(tool, "sh");
                assert_eq!(exit_code, 3);
                assert_eq!(stdout.trim(), "out");
                assert_eq!(stderr.trim(), "err");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let err = run_tool("epsplit-no-such-tool", &[]).unwrap_err();
        assert!(matches!(err, ToolError::Spawn { .. }));
    }
}
