// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native printing capabilities.

use prints_core::error::Result;
use prints_core::{PrintRequest, PrinterListing};

/// One OS printing backend: CUPS tools, the Windows spooler, or the stub.
///
/// Methods are the raw OS primitives. Input validation (empty names,
/// unknown printers, missing files) happens once in [`crate::ops`] so every
/// backend gets the same guarantees.
pub trait Spooler {
    /// Human-readable backend name (e.g. "Windows spooler").
    fn platform_name(&self) -> &str;

    /// Installed printers and the current default. Zero printers is a
    /// valid, non-error result.
    fn enumerate(&self) -> Result<PrinterListing>;

    /// Make `printer` the OS default.
    fn set_default(&self, printer: &str) -> Result<()>;

    /// Hand an existing PDF to the print subsystem and return a status line.
    fn submit(&self, request: &PrintRequest) -> Result<String>;
}

/// The subset of the Windows print spooler API the Windows backend needs.
pub trait SpoolerApi {
    /// Names of local and connected printers.
    fn printer_names(&self) -> Result<Vec<String>>;

    /// The current default printer. `Ok(None)` when none is configured.
    fn default_printer(&self) -> Result<Option<String>>;

    /// Set the default printer.
    fn set_default_printer(&self, printer: &str) -> Result<()>;
}
