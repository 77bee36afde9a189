use crate::ports::outbound::{CommandOutput, CommandRunner, OutputPolicy};
use crate::sbom_generation::domain::CommandInvocation;
use crate::shared::error::SbomError;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Command, Stdio};

/// SystemCommandRunner adapter executing commands as child processes
///
/// Streamed commands share a single pipe for stdout and stderr, so their
/// output reaches the console interleaved exactly as the child wrote it.
/// Each line is forwarded to stdout as soon as it is read.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &CommandInvocation) -> Command {
        let mut command = Command::new(invocation.program());
        command.args(invocation.args()).stdin(Stdio::null());
        command
    }

    fn launch_error(invocation: &CommandInvocation, error: io::Error) -> anyhow::Error {
        SbomError::CommandLaunchFailed {
            command: invocation.to_string(),
            details: error.to_string(),
        }
        .into()
    }

    fn run_streamed(&self, invocation: &CommandInvocation) -> Result<CommandOutput> {
        let (reader, writer) = io::pipe().context("Failed to create output pipe")?;

        // The Command holds our copies of the write end; it must be dropped
        // right after spawning or the reader never sees end-of-file.
        let mut child = {
            let mut command = Self::command(invocation);
            command
                .stdout(writer.try_clone().context("Failed to duplicate output pipe")?)
                .stderr(writer);
            command
                .spawn()
                .map_err(|e| Self::launch_error(invocation, e))?
        };

        if let Err(e) = Self::forward_lines(reader, invocation) {
            // Reap the child before bailing out so it does not outlive the run
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for: {}", invocation))?;

        Ok(CommandOutput {
            code: status.code(),
            ..CommandOutput::default()
        })
    }

    /// Copies merged output to stdout line by line until end-of-file
    fn forward_lines(reader: impl io::Read, invocation: &CommandInvocation) -> Result<()> {
        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader
                .read_until(b'\n', &mut line)
                .with_context(|| format!("Failed to read output of: {}", invocation))?;
            if read == 0 {
                return Ok(());
            }
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&line)
                .and_then(|_| stdout.flush())
                .context("Failed to forward command output")?;
        }
    }

    fn run_captured(&self, invocation: &CommandInvocation) -> Result<CommandOutput> {
        let output = Self::command(invocation)
            .output()
            .map_err(|e| Self::launch_error(invocation, e))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandInvocation, policy: OutputPolicy) -> Result<CommandOutput> {
        match policy {
            OutputPolicy::Stream => self.run_streamed(command),
            OutputPolicy::Capture => self.run_captured(command),
        }
    }
}
