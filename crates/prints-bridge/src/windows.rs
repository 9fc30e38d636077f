// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Windows backend.
//
// Enumeration and default changes go straight to the spooler API. Printing a
// PDF has no single native primitive, so submission cascades:
//
//   explicit printer + Acrobat found  -> `Acrobat /t` once per copy
//   explicit printer, no Acrobat      -> swap the default printer, shell
//                                        "print" verb, restore the default
//   no printer                        -> shell "print" verb to the default
//
// Acrobat's `/t` has no copy-count switch, hence one invocation per copy.
// Nothing verifies that each invocation actually enqueued a job.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use prints_core::error::{PrintsError, Result};
use prints_core::{AppConfig, PrintRequest, PrinterListing};
use tracing::{debug, info, warn};

use crate::runner::{CommandLine, ProcessRunner, SystemRunner};
use crate::traits::{Spooler, SpoolerApi};

/// Executables searched for on PATH when no configured path exists.
pub const ACROBAT_EXECUTABLES: &[&str] = &["Acrobat.exe", "AcroRd32.exe"];

pub const SENT_VIA_ACROBAT: &str = "Sent to printer via Adobe Reader.";
pub const SENT_VIA_DEFAULT_SWAP: &str = "Sent to printer via default-print fallback.";
pub const SENT_TO_DEFAULT: &str = "Sent to default printer.";

/// First existing Acrobat/Reader executable: configured candidates first,
/// then [`ACROBAT_EXECUTABLES`] on the given search path.
pub fn locate_acrobat(candidates: &[PathBuf], search_path: Option<&OsStr>) -> Option<PathBuf> {
    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Some(found.clone());
    }
    let search_path = search_path?;
    ACROBAT_EXECUTABLES.iter().find_map(|exe| {
        std::env::split_paths(search_path)
            .map(|dir| dir.join(exe))
            .find(|p| p.is_file())
    })
}

/// Characters PowerShell accepts as a single-quote delimiter.
const POWERSHELL_SINGLE_QUOTES: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// Quote text as a PowerShell single-quoted string literal. Every quote
/// character is doubled as itself, which PowerShell reads as one literal.
pub fn powershell_quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        if POWERSHELL_SINGLE_QUOTES.contains(&c) {
            quoted.push(c);
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// `<shell> -NoProfile -Command "Start-Process -FilePath '<file>' -Verb Print"`.
pub fn shell_print_command(shell_program: &str, path: &Path) -> CommandLine {
    let script = format!(
        "Start-Process -FilePath {} -Verb Print",
        powershell_quote(&path.to_string_lossy())
    );
    CommandLine::new(shell_program).args(["-NoProfile", "-Command", script.as_str()])
}

/// `<acrobat> /t <file> <printer> "" ""` (silent print to a named printer).
pub fn acrobat_command(acrobat: &Path, path: &Path, printer: &str) -> CommandLine {
    CommandLine::new(acrobat)
        .arg("/t")
        .arg(path)
        .args([printer, "", ""])
}

/// Scoped change of the OS default printer.
///
/// `acquire` records the current default and switches to the target; drop
/// switches back, on success and error paths alike.
pub struct DefaultPrinterSwap<'a, A: SpoolerApi + ?Sized> {
    api: &'a A,
    previous: Option<String>,
}

impl<'a, A: SpoolerApi + ?Sized> DefaultPrinterSwap<'a, A> {
    pub fn acquire(api: &'a A, previous: Option<String>, target: &str) -> Result<Self> {
        api.set_default_printer(target)?;
        info!(printer = target, previous = ?previous, "temporarily switched default printer");
        Ok(Self { api, previous })
    }
}

impl<A: SpoolerApi + ?Sized> Drop for DefaultPrinterSwap<'_, A> {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(previous) => match self.api.set_default_printer(&previous) {
                Ok(()) => info!(printer = %previous, "restored default printer"),
                Err(e) => warn!(printer = %previous, error = %e, "failed to restore default printer"),
            },
            // The spooler has no "unset default" call.
            None => warn!("no default printer was set before the swap; leaving the new one in place"),
        }
    }
}

/// Windows spooler backend.
pub struct WindowsSpooler<A, R = SystemRunner> {
    api: A,
    runner: R,
    config: AppConfig,
    search_path: Option<OsString>,
}

#[cfg(windows)]
impl WindowsSpooler<crate::win_spool::WinSpool, SystemRunner> {
    pub fn new(config: AppConfig) -> Self {
        Self::with_parts(
            crate::win_spool::WinSpool,
            SystemRunner,
            config,
            std::env::var_os("PATH"),
        )
    }
}

impl<A: SpoolerApi, R: ProcessRunner> WindowsSpooler<A, R> {
    pub fn with_parts(api: A, runner: R, config: AppConfig, search_path: Option<OsString>) -> Self {
        Self {
            api,
            runner,
            config,
            search_path,
        }
    }

    fn shell_print(&self, path: &Path, copies: u32) -> Result<()> {
        let cmd = shell_print_command(&self.config.shell_program, path);
        for copy in 1..=copies {
            debug!(copy, copies, "invoking shell print verb");
            self.runner.run(&cmd, true)?;
        }
        Ok(())
    }

    fn print_via_acrobat(&self, acrobat: &Path, request: &PrintRequest, printer: &str) -> Result<String> {
        let cmd = acrobat_command(acrobat, request.path(), printer);
        for copy in 1..=request.copies {
            debug!(copy, copies = request.copies, acrobat = %acrobat.display(), "invoking Acrobat");
            self.runner.run(&cmd, true)?;
        }
        info!(printer, copies = request.copies, "sent via Acrobat");
        Ok(SENT_VIA_ACROBAT.to_string())
    }

    fn print_via_default_swap(&self, request: &PrintRequest, printer: &str) -> Result<String> {
        let listing = self.enumerate()?;
        if !listing.contains(printer) {
            return Err(PrintsError::PrinterNotFound(printer.to_string()));
        }

        let _swap = DefaultPrinterSwap::acquire(&self.api, listing.default, printer)?;
        self.shell_print(request.path(), request.copies)?;
        // Give the spooler time to pick the job up before the default flips back.
        std::thread::sleep(self.config.settle_delay());

        info!(printer, copies = request.copies, "sent via default-printer swap");
        Ok(SENT_VIA_DEFAULT_SWAP.to_string())
    }
}

impl<A: SpoolerApi, R: ProcessRunner> Spooler for WindowsSpooler<A, R> {
    fn platform_name(&self) -> &str {
        "Windows spooler"
    }

    fn enumerate(&self) -> Result<PrinterListing> {
        let printers = self.api.printer_names()?;
        let default = self.api.default_printer().unwrap_or_else(|e| {
            debug!(error = %e, "could not query default printer");
            None
        });
        Ok(PrinterListing::new(printers, default))
    }

    fn set_default(&self, printer: &str) -> Result<()> {
        self.api.set_default_printer(printer)?;
        info!(printer, "Windows default printer set");
        Ok(())
    }

    fn submit(&self, request: &PrintRequest) -> Result<String> {
        let Some(printer) = request.printer() else {
            self.shell_print(request.path(), request.copies)?;
            info!(copies = request.copies, "sent to default printer via shell verb");
            return Ok(SENT_TO_DEFAULT.to_string());
        };

        match locate_acrobat(&self.config.acrobat_paths, self.search_path.as_deref()) {
            Some(acrobat) => self.print_via_acrobat(&acrobat, request, printer),
            None => {
                debug!("Acrobat not found, falling back to default-printer swap");
                self.print_via_default_swap(request, printer)
            }
        }
    }
}
