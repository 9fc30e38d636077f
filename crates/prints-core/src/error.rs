// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for prints.
//
// The display strings are what the user sees after `Error: ` on stderr, so
// they carry no prefixes of their own.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all prints operations.
#[derive(Debug, Error)]
pub enum PrintsError {
    // -- Input validation --
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Printer not found: {0}")]
    PrinterNotFound(String),

    // -- External processes / OS --
    /// An external command exited nonzero. Holds its stderr (or stdout).
    #[error("{0}")]
    CommandFailed(String),

    /// The native print spooler API reported a failure.
    #[error("print spooler error: {0}")]
    Spooler(String),

    /// A required platform facility is missing (CUPS tools, spooler API,
    /// unsupported OS).
    #[error("{0}")]
    Environment(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintsError>;
