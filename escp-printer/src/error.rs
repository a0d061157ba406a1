//! Error types for the printer library

use thiserror::Error;

/// Printer error types
///
/// Only fatal conditions are represented here. A short write and failures
/// while ending the page, ending the document, or closing the handle are
/// logged by the sender and do not produce an error value.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Opening the named printer failed
    #[error("failed to open printer '{name}' (OS error {code})")]
    Open { name: String, code: u32 },

    /// Starting the spooler document failed
    #[error("failed to start document (OS error {code})")]
    StartDocument { code: u32 },

    /// Starting the page failed
    #[error("failed to start page (OS error {code})")]
    StartPage { code: u32 },

    /// Writing the buffer to the spooler failed
    #[error("write to printer failed (OS error {code})")]
    Write { code: u32 },

    /// Print buffer allocation failed before any printer interaction
    #[error("failed to allocate print buffer ({bytes} bytes)")]
    Allocation { bytes: usize },
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
