// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Windows print spooler API (winspool.drv) via `windows-sys`.

use std::ffi::{OsStr, OsString};
use std::os::windows::ffi::{OsStrExt, OsStringExt};

use prints_core::error::{PrintsError, Result};
use windows_sys::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_INSUFFICIENT_BUFFER, GetLastError};
use windows_sys::Win32::Graphics::Printing::{
    EnumPrintersW, GetDefaultPrinterW, PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL,
    PRINTER_INFO_4W, SetDefaultPrinterW,
};

use crate::traits::SpoolerApi;

/// `PRINTER_INFO_4` carries just the name, server, and attributes.
const INFO_LEVEL: u32 = 4;

/// The real spooler.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinSpool;

impl SpoolerApi for WinSpool {
    fn printer_names(&self) -> Result<Vec<String>> {
        let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
        let mut needed = 0u32;
        let mut returned = 0u32;

        // SAFETY: size query; a null buffer of length 0 is allowed and only
        // `needed`/`returned` are written.
        let ok = unsafe {
            EnumPrintersW(
                flags,
                std::ptr::null(),
                INFO_LEVEL,
                std::ptr::null_mut(),
                0,
                &mut needed,
                &mut returned,
            )
        };
        if ok == 0 {
            // SAFETY: plain thread-local error read.
            let code = unsafe { GetLastError() };
            if code != ERROR_INSUFFICIENT_BUFFER {
                return Err(spooler_error("EnumPrinters"));
            }
        }
        if needed == 0 {
            return Ok(Vec::new());
        }

        // u64 storage keeps the records pointer-aligned.
        let mut buf = vec![0u64; (needed as usize).div_ceil(8)];
        // SAFETY: `buf` holds at least `needed` writable bytes.
        let ok = unsafe {
            EnumPrintersW(
                flags,
                std::ptr::null(),
                INFO_LEVEL,
                buf.as_mut_ptr().cast::<u8>(),
                needed,
                &mut needed,
                &mut returned,
            )
        };
        if ok == 0 {
            return Err(spooler_error("EnumPrinters"));
        }

        // SAFETY: on success the buffer starts with `returned` PRINTER_INFO_4W
        // records whose string pointers point into the same buffer.
        let records = unsafe {
            std::slice::from_raw_parts(buf.as_ptr().cast::<PRINTER_INFO_4W>(), returned as usize)
        };
        Ok(records
            .iter()
            .filter(|r| !r.pPrinterName.is_null())
            // SAFETY: non-null, NUL-terminated, alive while `buf` is.
            .map(|r| unsafe { from_wide_ptr(r.pPrinterName) })
            .collect())
    }

    fn default_printer(&self) -> Result<Option<String>> {
        let mut len = 0u32;
        // SAFETY: size query with a null buffer.
        let ok = unsafe { GetDefaultPrinterW(std::ptr::null_mut(), &mut len) };
        if ok == 0 {
            // SAFETY: plain thread-local error read.
            match unsafe { GetLastError() } {
                ERROR_INSUFFICIENT_BUFFER => {}
                ERROR_FILE_NOT_FOUND => return Ok(None),
                _ => return Err(spooler_error("GetDefaultPrinter")),
            }
        }
        if len == 0 {
            return Ok(None);
        }

        let mut buf = vec![0u16; len as usize];
        // SAFETY: `buf` has room for `len` UTF-16 units including the NUL.
        let ok = unsafe { GetDefaultPrinterW(buf.as_mut_ptr(), &mut len) };
        if ok == 0 {
            return Err(spooler_error("GetDefaultPrinter"));
        }

        let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
        let name = OsString::from_wide(&buf[..end]).to_string_lossy().into_owned();
        Ok((!name.is_empty()).then_some(name))
    }

    fn set_default_printer(&self, printer: &str) -> Result<()> {
        let wide: Vec<u16> = OsStr::new(printer).encode_wide().chain(Some(0)).collect();
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        let ok = unsafe { SetDefaultPrinterW(wide.as_ptr()) };
        if ok == 0 {
            return Err(spooler_error("SetDefaultPrinter"));
        }
        Ok(())
    }
}

fn spooler_error(call: &str) -> PrintsError {
    PrintsError::Spooler(format!("{call} failed: {}", std::io::Error::last_os_error()))
}

/// # Safety
/// `ptr` must be non-null and point to a NUL-terminated UTF-16 string.
unsafe fn from_wide_ptr(ptr: *const u16) -> String {
    let mut len = 0usize;
    // SAFETY: guaranteed NUL-terminated by the caller.
    unsafe {
        while *ptr.add(len) != 0 {
            len += 1;
        }
        OsString::from_wide(std::slice::from_raw_parts(ptr, len))
            .to_string_lossy()
            .into_owned()
    }
}
