// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording fakes for backend tests.

use std::cell::{Cell, RefCell};

use prints_core::error::{PrintsError, Result};
use prints_core::{PrintRequest, PrinterListing};

use crate::runner::{CommandLine, CommandOutput, ProcessRunner};
use crate::traits::{Spooler, SpoolerApi};

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn stdout(text: &str) -> Self {
        Self {
            stdout: text.to_string(),
            ..Default::default()
        }
    }
}

/// Process runner that records every command and answers from a closure.
pub struct FakeRunner {
    respond: Box<dyn Fn(&CommandLine) -> CommandOutput>,
    calls: RefCell<Vec<CommandLine>>,
}

impl FakeRunner {
    pub fn new(respond: impl Fn(&CommandLine) -> CommandOutput + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &CommandLine, check: bool) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        let output = (self.respond)(command);
        if check {
            output.into_checked(command)
        } else {
            Ok(output)
        }
    }
}

/// In-memory Windows spooler API.
pub struct FakeSpoolerApi {
    printers: Vec<String>,
    default: RefCell<Option<String>>,
    set_calls: RefCell<Vec<String>>,
    default_query_fails: Cell<bool>,
}

impl FakeSpoolerApi {
    pub fn new(printers: &[&str], default: Option<&str>) -> Self {
        Self {
            printers: printers.iter().map(|p| p.to_string()).collect(),
            default: RefCell::new(default.map(str::to_string)),
            set_calls: RefCell::new(Vec::new()),
            default_query_fails: Cell::new(false),
        }
    }

    pub fn fail_default_query(&self) {
        self.default_query_fails.set(true);
    }

    pub fn current_default(&self) -> Option<String> {
        self.default.borrow().clone()
    }

    pub fn set_calls(&self) -> Vec<String> {
        self.set_calls.borrow().clone()
    }
}

impl SpoolerApi for FakeSpoolerApi {
    fn printer_names(&self) -> Result<Vec<String>> {
        Ok(self.printers.clone())
    }

    fn default_printer(&self) -> Result<Option<String>> {
        if self.default_query_fails.get() {
            return Err(PrintsError::Spooler("GetDefaultPrinter failed".into()));
        }
        Ok(self.current_default())
    }

    fn set_default_printer(&self, printer: &str) -> Result<()> {
        self.set_calls.borrow_mut().push(printer.to_string());
        *self.default.borrow_mut() = Some(printer.to_string());
        Ok(())
    }
}

/// Backend double for the validated operations: counts every call.
pub struct FakeSpooler {
    listing: PrinterListing,
    pub enumerations: Cell<usize>,
    pub defaults_set: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<PrintRequest>>,
}

impl FakeSpooler {
    pub fn new(printers: &[&str], default: Option<&str>) -> Self {
        Self {
            listing: PrinterListing::new(
                printers.iter().map(|p| p.to_string()).collect(),
                default.map(str::to_string),
            ),
            enumerations: Cell::new(0),
            defaults_set: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }
}

impl Spooler for FakeSpooler {
    fn platform_name(&self) -> &str {
        "fake"
    }

    fn enumerate(&self) -> Result<PrinterListing> {
        self.enumerations.set(self.enumerations.get() + 1);
        Ok(self.listing.clone())
    }

    fn set_default(&self, printer: &str) -> Result<()> {
        self.defaults_set.borrow_mut().push(printer.to_string());
        Ok(())
    }

    fn submit(&self, request: &PrintRequest) -> Result<String> {
        self.submitted.borrow_mut().push(request.clone());
        Ok("queued".into())
    }
}
