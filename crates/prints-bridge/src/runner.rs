// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Synchronous external command execution.
//
// Backends never touch `std::process` directly; they go through
// `ProcessRunner` so their command lines can be checked in tests.

use std::ffi::OsString;
use std::fmt;
use std::io::ErrorKind;
use std::process::{Command, Output};

use prints_core::error::{PrintsError, Result};
use tracing::debug;

/// A command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// Program plus literal arguments. Never goes through a shell.
    Argv { program: OsString, args: Vec<OsString> },
    /// A single command string. With `shell_on_windows` it is handed to
    /// `cmd /C` on Windows so builtins resolve; everywhere else the string
    /// is run as a program name.
    Line { line: String, shell_on_windows: bool },
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self::Argv {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn line(line: impl Into<String>, shell_on_windows: bool) -> Self {
        Self::Line {
            line: line.into(),
            shell_on_windows,
        }
    }

    /// Append one argument. No-op on `Line` commands.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        if let Self::Argv { args, .. } = &mut self {
            args.push(arg.into());
        }
        self
    }

    pub fn args<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        if let Self::Argv { args, .. } = &mut self {
            args.extend(extra.into_iter().map(Into::into));
        }
        self
    }

    /// Program name as text (lossy).
    pub fn program(&self) -> String {
        match self {
            Self::Argv { program, .. } => program.to_string_lossy().into_owned(),
            Self::Line { line, .. } => line.clone(),
        }
    }

    /// Arguments as text (lossy). Empty for `Line` commands.
    pub fn args_lossy(&self) -> Vec<String> {
        match self {
            Self::Argv { args, .. } => args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect(),
            Self::Line { .. } => Vec::new(),
        }
    }

    fn to_command(&self) -> Command {
        match self {
            Self::Argv { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
            Self::Line {
                line,
                shell_on_windows,
            } => {
                if *shell_on_windows && cfg!(windows) {
                    let mut cmd = Command::new("cmd");
                    cmd.args(["/C", line.as_str()]);
                    cmd
                } else {
                    Command::new(line)
                }
            }
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.args_lossy() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished command. Both streams are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `-1` when the process was terminated by a signal.
    pub status: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    /// Turn a nonzero exit into `CommandFailed`, preferring stderr, then
    /// stdout, then a generic message naming the command.
    pub fn into_checked(self, command: &CommandLine) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        let message = if !self.stderr.is_empty() {
            self.stderr
        } else if !self.stdout.is_empty() {
            self.stdout
        } else {
            format!("Command failed: {command}")
        };
        Err(PrintsError::CommandFailed(message))
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            status: output.status.code().unwrap_or(-1),
        }
    }
}

/// Runs commands to completion.
pub trait ProcessRunner {
    /// Run `command` and wait for it. With `check`, a nonzero exit is an
    /// error; without it the exit code is just reported.
    fn run(&self, command: &CommandLine, check: bool) -> Result<CommandOutput>;
}

/// `std::process` backed runner.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, check: bool) -> Result<CommandOutput> {
        debug!(command = %command, check, "running command");

        let output = command.to_command().output().map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                PrintsError::Environment(format!("{} is not available: {e}", command.program()))
            }
            _ => PrintsError::Io(e),
        })?;

        let output = CommandOutput::from(output);
        debug!(status = output.status, "command finished");

        if check {
            output.into_checked(command)
        } else {
            Ok(output)
        }
    }
}
