// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: printer listings and print requests.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::Result;

/// Printers known to the OS at query time, plus the current default.
///
/// Never cached: every enumeration builds a fresh listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterListing {
    /// Printer names in the order the OS reported them.
    pub printers: Vec<String>,
    /// The OS default printer, if one is configured.
    pub default: Option<String>,
}

impl PrinterListing {
    pub fn new(printers: Vec<String>, default: Option<String>) -> Self {
        Self {
            printers,
            // An empty default name means "no default".
            default: default.filter(|name| !name.is_empty()),
        }
    }

    /// Exact-match membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.printers.iter().any(|p| p == name)
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.default.as_deref() == Some(name)
    }

    /// JSON form used by `list --json`.
    ///
    /// Separators are `", "` and `": "` and non-ASCII text is escaped, so the
    /// output matches what scripts consuming the listing already parse.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Compact single-line JSON with spaced separators and `\uXXXX` escapes.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// A single print submission: file, optional target, and copy count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    pub path: PathBuf,
    /// Target printer. `None` means the OS default.
    pub printer: Option<String>,
    /// Always at least 1.
    pub copies: u32,
}

impl PrintRequest {
    pub fn new(path: impl Into<PathBuf>, printer: Option<String>, copies: u32) -> Self {
        Self {
            path: path.into(),
            printer: printer.filter(|name| !name.is_empty()),
            copies: copies.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn printer(&self) -> Option<&str> {
        self.printer.as_deref()
    }
}
