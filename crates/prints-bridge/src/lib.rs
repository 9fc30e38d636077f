// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// prints — Native printing backends.
//
// One `Spooler` trait, one implementation per OS family, chosen once at
// startup by `platform_spooler`. The backends' decision logic compiles on
// every target so it is tested everywhere; only the raw Windows API calls
// are Windows-only.

pub mod ops;
pub mod runner;
pub mod traits;

#[cfg_attr(not(unix), allow(dead_code))]
pub mod cups;

#[cfg_attr(not(windows), allow(dead_code))]
pub mod windows;

#[cfg(windows)]
pub mod win_spool;

#[cfg_attr(any(unix, windows), allow(dead_code))]
pub mod stub;

#[cfg(test)]
mod fake;

pub use ops::{list_printers, print_pdf, set_default_printer};
pub use runner::{CommandLine, CommandOutput, ProcessRunner, SystemRunner};
pub use traits::{Spooler, SpoolerApi};

use prints_core::AppConfig;

/// Backend for the operating system this binary was built for.
pub fn platform_spooler(config: &AppConfig) -> Box<dyn Spooler> {
    #[cfg(windows)]
    {
        Box::new(windows::WindowsSpooler::new(config.clone()))
    }
    #[cfg(unix)]
    {
        // CUPS needs none of the Windows tunables.
        let _ = config;
        Box::new(cups::CupsSpooler::new())
    }
    #[cfg(not(any(windows, unix)))]
    {
        let _ = config;
        Box::new(stub::UnsupportedSpooler::new())
    }
}
