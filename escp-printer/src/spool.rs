//! Spooler seam and raw-job lifecycle
//!
//! The OS spooler is modeled as a trait of result-returning calls so the
//! job lifecycle can be driven (and tested) independently of the Win32
//! bindings.

use crate::error::{PrintError, PrintResult};
use tracing::{error, info, instrument, warn};

/// Document metadata handed to the spooler when a job starts
#[derive(Debug, Clone)]
pub struct DocInfo<'a> {
    /// Job name as shown in the print queue
    pub name: &'a str,
    /// Redirect output to a file instead of the device, if set
    pub output_file: Option<&'a str>,
    /// Spooler datatype tag; "RAW" forwards bytes to the driver unmodified
    pub datatype: &'a str,
}

impl<'a> DocInfo<'a> {
    /// Metadata for a raw pass-through job
    pub fn raw(name: &'a str) -> Self {
        Self {
            name,
            output_file: None,
            datatype: "RAW",
        }
    }
}

/// One job's view of an OS print spooler
///
/// Each method maps to a single spooler call; `Err` carries the OS error
/// code. The printer handle is implicit in the implementor: `open`
/// acquires it and `close` releases it.
pub trait Spooler {
    fn open(&mut self, printer: &str) -> Result<(), u32>;
    fn start_document(&mut self, doc: &DocInfo<'_>) -> Result<(), u32>;
    fn start_page(&mut self) -> Result<(), u32>;
    /// Write the buffer; returns the number of bytes the spooler accepted
    fn write(&mut self, data: &[u8]) -> Result<usize, u32>;
    fn end_page(&mut self) -> Result<(), u32>;
    fn end_document(&mut self) -> Result<(), u32>;
    fn close(&mut self) -> Result<(), u32>;
}

/// Send a fully assembled buffer to a named printer as one spooler job
///
/// Returns the number of bytes the spooler accepted. Open, start-document
/// and start-page failures abort after releasing whatever was already
/// acquired. From the write onward nothing aborts the teardown: a short
/// write is logged as a warning and end-page, end-document and close are
/// each attempted even if an earlier teardown step fails. Nothing is
/// retried.
#[instrument(skip(spooler, doc, data), fields(data_len = data.len()))]
pub fn send_raw<S: Spooler>(
    spooler: &mut S,
    printer: &str,
    doc: &DocInfo<'_>,
    data: &[u8],
) -> PrintResult<usize> {
    if let Err(code) = spooler.open(printer) {
        error!(printer, code, "failed to open printer");
        return Err(PrintError::Open {
            name: printer.to_string(),
            code,
        });
    }

    if let Err(code) = spooler.start_document(doc) {
        error!(code, "failed to start document");
        if let Err(code) = spooler.close() {
            warn!(code, "failed to close printer");
        }
        return Err(PrintError::StartDocument { code });
    }

    if let Err(code) = spooler.start_page() {
        error!(code, "failed to start page");
        if let Err(code) = spooler.end_document() {
            warn!(code, "failed to end document");
        }
        if let Err(code) = spooler.close() {
            warn!(code, "failed to close printer");
        }
        return Err(PrintError::StartPage { code });
    }

    let result = match spooler.write(data) {
        Ok(written) if written == data.len() => {
            info!("{} bytes printed", written);
            Ok(written)
        }
        Ok(written) => {
            // Short write: report and carry on with the teardown
            warn!(sent = data.len(), written, "not all bytes were written");
            Ok(written)
        }
        Err(code) => {
            error!(code, "write to printer failed");
            Err(PrintError::Write { code })
        }
    };

    // Best-effort teardown: each step runs even if the previous one failed
    if let Err(code) = spooler.end_page() {
        warn!(code, "failed to end page");
    }
    if let Err(code) = spooler.end_document() {
        warn!(code, "failed to end document");
    }
    if let Err(code) = spooler.close() {
        warn!(code, "failed to close printer");
    }

    result
}
