// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// CUPS backend for macOS and Linux.
//
// Drives the CUPS command-line tools (`lpstat`, `lpoptions`, `lp`) and
// scrapes their text output. The parsing contract:
//   lpstat -a  "<name> accepting requests since <timestamp>"  -> first token
//   lpstat -d  "system default destination: <name>"          -> after first ':'

use prints_core::error::Result;
use prints_core::{PrintRequest, PrinterListing};
use tracing::{debug, info};

use crate::runner::{CommandLine, ProcessRunner, SystemRunner};
use crate::traits::Spooler;

/// Status line when `lp` succeeds without printing anything.
pub const SUBMITTED: &str = "Submitted to print queue.";

/// Printer names from `lpstat -a` output.
pub fn parse_accepting(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Default destination from `lpstat -d` output.
///
/// `None` for "no system default destination" (no colon) or an empty name.
pub fn parse_default_destination(output: &str) -> Option<String> {
    let (_, name) = output.split_once(':')?;
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// `lp [-d printer] [-n copies] <file>`.
pub fn lp_command(request: &PrintRequest) -> CommandLine {
    let mut cmd = CommandLine::new("lp");
    if let Some(printer) = request.printer() {
        cmd = cmd.args(["-d", printer]);
    }
    if request.copies > 1 {
        cmd = cmd.args(["-n".to_string(), request.copies.to_string()]);
    }
    cmd.arg(request.path())
}

/// CUPS command-line backend.
pub struct CupsSpooler<R = SystemRunner> {
    runner: R,
}

impl CupsSpooler<SystemRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for CupsSpooler<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> CupsSpooler<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: ProcessRunner> Spooler for CupsSpooler<R> {
    fn platform_name(&self) -> &str {
        if cfg!(target_os = "macos") {
            "macOS (CUPS)"
        } else {
            "Unix (CUPS)"
        }
    }

    fn enumerate(&self) -> Result<PrinterListing> {
        // Nonzero exits are expected here (lpstat fails when no printers or
        // no default exist) and just mean "nothing to report".
        let accepting = self
            .runner
            .run(&CommandLine::new("lpstat").arg("-a"), false)?;
        let printers = parse_accepting(&accepting.stdout);

        let destination = self
            .runner
            .run(&CommandLine::new("lpstat").arg("-d"), false)?;
        let default = parse_default_destination(&destination.stdout);

        debug!(count = printers.len(), default = ?default, "enumerated CUPS printers");
        Ok(PrinterListing::new(printers, default))
    }

    fn set_default(&self, printer: &str) -> Result<()> {
        // User-level default; needs no elevated privileges.
        self.runner
            .run(&CommandLine::new("lpoptions").args(["-d", printer]), true)?;
        info!(printer, "CUPS default printer set");
        Ok(())
    }

    fn submit(&self, request: &PrintRequest) -> Result<String> {
        let out = self.runner.run(&lp_command(request), true)?;
        info!(
            file = %request.path().display(),
            printer = request.printer().unwrap_or("<default>"),
            copies = request.copies,
            "submitted via lp"
        );
        if out.stdout.is_empty() {
            Ok(SUBMITTED.to_string())
        } else {
            Ok(out.stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeRunner;
    use crate::runner::CommandOutput;
    use prints_core::PrintsError;

    const LPSTAT_A: &str = "\
HP-OfficeJet accepting requests since Tue 14 Oct 2025 09:12:01 AM CEST
Canon-MX accepting requests since Mon 06 Oct 2025 17:40:22 PM CEST

";

    fn lpstat_runner(accepting: &'static str, default: &'static str) -> FakeRunner {
        FakeRunner::new(move |cmd| {
            let args = cmd.args_lossy();
            match (cmd.program().as_str(), args.first().map(String::as_str)) {
                ("lpstat", Some("-a")) => CommandOutput::stdout(accepting),
                ("lpstat", Some("-d")) => CommandOutput::stdout(default),
                _ => CommandOutput::default(),
            }
        })
    }

    #[test]
    fn parse_accepting_takes_first_token_and_skips_blanks() {
        assert_eq!(parse_accepting(LPSTAT_A), vec!["HP-OfficeJet", "Canon-MX"]);
        assert!(parse_accepting("").is_empty());
        assert!(parse_accepting("   \n\t\n").is_empty());
    }

    #[test]
    fn parse_default_destination_variants() {
        assert_eq!(
            parse_default_destination("system default destination: HP-OfficeJet"),
            Some("HP-OfficeJet".into())
        );
        assert_eq!(parse_default_destination("no system default destination"), None);
        assert_eq!(parse_default_destination("system default destination:   "), None);
        assert_eq!(parse_default_destination(""), None);
        // Only the first colon splits.
        assert_eq!(
            parse_default_destination("system default destination: ipp:queue"),
            Some("ipp:queue".into())
        );
    }

    #[test]
    fn enumerate_reads_both_lpstat_calls() {
        let runner = lpstat_runner(LPSTAT_A, "system default destination: HP-OfficeJet");
        let spooler = CupsSpooler::with_runner(runner);

        let listing = spooler.enumerate().unwrap();
        assert_eq!(listing.printers, vec!["HP-OfficeJet", "Canon-MX"]);
        assert_eq!(listing.default.as_deref(), Some("HP-OfficeJet"));
    }

    #[test]
    fn enumerate_with_no_printers_is_empty_not_error() {
        let runner = FakeRunner::new(|_| CommandOutput {
            stdout: String::new(),
            stderr: "lpstat: No destinations added.".into(),
            status: 1,
        });
        let spooler = CupsSpooler::with_runner(runner);

        let listing = spooler.enumerate().unwrap();
        assert!(listing.printers.is_empty());
        assert_eq!(listing.default, None);
    }

    #[test]
    fn lp_with_copies_and_no_printer() {
        let runner = FakeRunner::new(|_| CommandOutput::default());
        let spooler = CupsSpooler::with_runner(runner);

        let request = PrintRequest::new("report.pdf", None, 3);
        let status = spooler.submit(&request).unwrap();
        assert_eq!(status, SUBMITTED);

        let calls = spooler.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program(), "lp");
        assert_eq!(calls[0].args_lossy(), vec!["-n", "3", "report.pdf"]);
    }

    #[test]
    fn lp_with_printer_and_single_copy() {
        let cmd = lp_command(&PrintRequest::new("/tmp/a.pdf", Some("Canon-MX".into()), 1));
        assert_eq!(cmd.args_lossy(), vec!["-d", "Canon-MX", "/tmp/a.pdf"]);
    }

    #[test]
    fn submit_returns_lp_stdout() {
        let runner = FakeRunner::new(|_| {
            CommandOutput::stdout("request id is Canon-MX-42 (1 file(s))")
        });
        let spooler = CupsSpooler::with_runner(runner);
        let status = spooler
            .submit(&PrintRequest::new("a.pdf", Some("Canon-MX".into()), 1))
            .unwrap();
        assert_eq!(status, "request id is Canon-MX-42 (1 file(s))");
    }

    #[test]
    fn submit_failure_carries_lp_stderr() {
        let runner = FakeRunner::new(|_| CommandOutput {
            stdout: String::new(),
            stderr: "lp: The printer or class does not exist.".into(),
            status: 1,
        });
        let spooler = CupsSpooler::with_runner(runner);
        let err = spooler
            .submit(&PrintRequest::new("a.pdf", Some("Ghost".into()), 1))
            .unwrap_err();
        assert!(
            matches!(err, PrintsError::CommandFailed(ref m) if m == "lp: The printer or class does not exist.")
        );
    }

    #[test]
    fn set_default_uses_lpoptions() {
        let runner = FakeRunner::new(|_| CommandOutput::default());
        let spooler = CupsSpooler::with_runner(runner);
        spooler.set_default("Canon-MX").unwrap();

        let calls = spooler.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to_string(), "lpoptions -d Canon-MX");
    }

    #[test]
    fn set_default_failure_propagates() {
        let runner = FakeRunner::new(|_| CommandOutput {
            stderr: "lpoptions: Unable to set default".into(),
            status: 1,
            ..Default::default()
        });
        let spooler = CupsSpooler::with_runner(runner);
        let err = spooler.set_default("Canon-MX").unwrap_err();
        assert!(matches!(err, PrintsError::CommandFailed(_)));
    }
}
