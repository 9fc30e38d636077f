// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub backend for targets with neither the Windows spooler nor CUPS.
//
// Every operation returns an environment error naming the OS.

use prints_core::error::{PrintsError, Result};
use prints_core::{PrintRequest, PrinterListing};

use crate::traits::Spooler;

/// Backend returned on unsupported platforms.
pub struct UnsupportedSpooler {
    os: &'static str,
}

impl UnsupportedSpooler {
    pub fn new() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub fn for_os(os: &'static str) -> Self {
        Self { os }
    }

    fn unavailable(&self, operation: &str) -> PrintsError {
        tracing::warn!(operation, os = self.os, "called on unsupported platform");
        PrintsError::Environment(format!(
            "printing is not supported on this platform ({})",
            self.os
        ))
    }
}

impl Default for UnsupportedSpooler {
    fn default() -> Self {
        Self::new()
    }
}

impl Spooler for UnsupportedSpooler {
    fn platform_name(&self) -> &str {
        "Unsupported (stub)"
    }

    fn enumerate(&self) -> Result<PrinterListing> {
        Err(self.unavailable("enumerate"))
    }

    fn set_default(&self, _printer: &str) -> Result<()> {
        Err(self.unavailable("set_default"))
    }

    fn submit(&self, _request: &PrintRequest) -> Result<String> {
        Err(self.unavailable("submit"))
    }
}
