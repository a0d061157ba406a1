//! # escp-printer
//!
//! Raw ESC/P printing through the Windows print spooler.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/P command building (dot-matrix printers, e.g. the Epson LQ series)
//! - RAW spooler jobs (bytes forwarded to the driver unmodified)
//!
//! What to print (bill layout, totals) stays in application code.
//!
//! ## Example
//!
//! ```ignore
//! use escp_printer::{EscpBuilder, WindowsPrinter};
//!
//! // Build the ESC/P buffer
//! let mut builder = EscpBuilder::new(256)?;
//! builder.line_spacing_1_6();
//! builder.page_length(30);
//! builder.line("Total: Rs. 1500.00");
//! builder.form_feed();
//!
//! // Send it as one RAW job
//! let printer = WindowsPrinter::new("EPSON-LQ-310");
//! printer.print_raw("Raw Print Job", &builder.build())?;
//! ```

mod error;
mod escp;
mod spool;
#[cfg(windows)]
mod winspool;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use escp::EscpBuilder;
pub use spool::{DocInfo, Spooler, send_raw};

#[cfg(windows)]
pub use winspool::{WinSpooler, WindowsPrinter};
