// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The three user-facing operations, validated once on top of any backend.

use std::path::Path;

use prints_core::error::{PrintsError, Result};
use prints_core::{PrintRequest, PrinterListing};
use tracing::{debug, info};

use crate::traits::Spooler;

/// List printers and the current default.
pub fn list_printers(spooler: &dyn Spooler) -> Result<PrinterListing> {
    debug!(backend = spooler.platform_name(), "listing printers");
    spooler.enumerate()
}

/// Make `printer` the OS default.
///
/// The name is checked against a fresh enumeration immediately before the
/// change; nothing is mutated when validation fails.
pub fn set_default_printer(spooler: &dyn Spooler, printer: &str) -> Result<()> {
    if printer.is_empty() {
        return Err(PrintsError::InvalidArgument("Printer name is required.".into()));
    }

    let listing = spooler.enumerate()?;
    if !listing.contains(printer) {
        return Err(PrintsError::PrinterNotFound(printer.to_string()));
    }

    spooler.set_default(printer)?;
    info!(printer, backend = spooler.platform_name(), "default printer changed");
    Ok(())
}

/// Submit a PDF and return the backend's status line.
pub fn print_pdf(spooler: &dyn Spooler, request: &PrintRequest) -> Result<String> {
    ensure_file(request.path())?;
    debug!(
        file = %request.path().display(),
        printer = request.printer().unwrap_or("<default>"),
        copies = request.copies,
        backend = spooler.platform_name(),
        "printing"
    );
    spooler.submit(request)
}

/// Fail with `FileNotFound` unless `path` is an existing regular file.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(PrintsError::FileNotFound(path.to_path_buf()))
    }
}
