//! Win32 spooler backend
//!
//! Implements the `Spooler` seam over the winspool API. Every failed call
//! reports `GetLastError` so log lines carry the OS error code.

use crate::error::PrintResult;
use crate::spool::{DocInfo, Spooler, send_raw};
use core::ffi::c_void;
use windows::Win32::Foundation::{ERROR_INVALID_HANDLE, GetLastError};
use windows::Win32::Graphics::Printing::{
    ClosePrinter, DOC_INFO_1W, EndDocPrinter, EndPagePrinter, OpenPrinterW, PRINTER_HANDLE,
    StartDocPrinterW, StartPagePrinter, WritePrinter,
};
use windows::core::{PCWSTR, PWSTR};

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Spooler backed by the Windows print spooler
///
/// Holds at most one open printer handle. The handle is released by
/// `close`, or on drop if a caller bails out early.
#[derive(Default)]
pub struct WinSpooler {
    handle: Option<PRINTER_HANDLE>,
}

impl WinSpooler {
    pub fn new() -> Self {
        Self { handle: None }
    }

    fn handle(&self) -> Result<PRINTER_HANDLE, u32> {
        self.handle.ok_or(ERROR_INVALID_HANDLE.0)
    }

    fn last_error() -> u32 {
        unsafe { GetLastError().0 }
    }
}

impl Spooler for WinSpooler {
    fn open(&mut self, printer: &str) -> Result<(), u32> {
        let name_w = to_wide(printer);
        let mut handle = PRINTER_HANDLE::default();

        unsafe {
            OpenPrinterW(PCWSTR::from_raw(name_w.as_ptr()), &mut handle, None)
                .map_err(|_| Self::last_error())?;
        }

        self.handle = Some(handle);
        Ok(())
    }

    fn start_document(&mut self, doc: &DocInfo<'_>) -> Result<(), u32> {
        let handle = self.handle()?;

        // Wide buffers must outlive the StartDocPrinterW call
        let doc_name_w = to_wide(doc.name);
        let datatype_w = to_wide(doc.datatype);
        let output_w = doc.output_file.map(to_wide);

        let doc_info = DOC_INFO_1W {
            pDocName: PWSTR(doc_name_w.as_ptr() as *mut _),
            pOutputFile: output_w
                .as_ref()
                .map_or(PWSTR::null(), |w| PWSTR(w.as_ptr() as *mut _)),
            pDatatype: PWSTR(datatype_w.as_ptr() as *mut _),
        };

        unsafe {
            if StartDocPrinterW(handle, 1, &doc_info as *const DOC_INFO_1W) == 0 {
                return Err(Self::last_error());
            }
        }
        Ok(())
    }

    fn start_page(&mut self) -> Result<(), u32> {
        let handle = self.handle()?;
        unsafe {
            if !StartPagePrinter(handle).as_bool() {
                return Err(Self::last_error());
            }
        }
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, u32> {
        let handle = self.handle()?;
        let mut written: u32 = 0;

        let ok = unsafe {
            WritePrinter(
                handle,
                data.as_ptr() as *const c_void,
                data.len() as u32,
                &mut written,
            )
        };

        if !ok.as_bool() {
            return Err(Self::last_error());
        }
        Ok(written as usize)
    }

    fn end_page(&mut self) -> Result<(), u32> {
        let handle = self.handle()?;
        unsafe {
            if !EndPagePrinter(handle).as_bool() {
                return Err(Self::last_error());
            }
        }
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), u32> {
        let handle = self.handle()?;
        unsafe {
            if !EndDocPrinter(handle).as_bool() {
                return Err(Self::last_error());
            }
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), u32> {
        let handle = self.handle.take().ok_or(ERROR_INVALID_HANDLE.0)?;
        unsafe {
            if !ClosePrinter(handle).as_bool() {
                return Err(Self::last_error());
            }
        }
        Ok(())
    }
}

impl Drop for WinSpooler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            unsafe {
                let _ = ClosePrinter(handle);
            }
        }
    }
}

/// A named printer reached through the Windows spooler
pub struct WindowsPrinter {
    name: String,
}

impl WindowsPrinter {
    /// Create a printer with a specific name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Get the printer name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Send raw bytes as one spooler job; returns the bytes accepted
    pub fn print_raw(&self, doc_name: &str, data: &[u8]) -> PrintResult<usize> {
        let mut spooler = WinSpooler::new();
        send_raw(&mut spooler, &self.name, &DocInfo::raw(doc_name), data)
    }
}
