//! bill-print — one-shot raw bill printing
//!
//! Assembles a fixed ESC/P command buffer around a literal bill text and
//! submits it to the configured printer as a single RAW spooler job. No
//! arguments, no config files; printing failures are logged and do not
//! change the exit code.

use escp_printer::{EscpBuilder, PrintResult};
use std::process::ExitCode;

/// Exact name of the target printer as installed in Windows
const PRINTER_NAME: &str = "EPSON-LQ-310";

/// Job name shown in the print queue
const DOC_NAME: &str = "Raw Print Job";

/// Page length for 5-inch paper at 6 lines per inch
const PAGE_LENGTH_LINES: u8 = 30;

/// Bill content, pre-formatted for the paper width.
/// Trailing newlines leave spacing before the form feed.
const BILL_TEXT: &str = concat!(
    "  Binara Medical Centre\n",
    "  ---------------------------------\n",
    "  Bill No.: 001        Date: 31/05/2025\n",
    "  Customer: Test Customer\n",
    "\n",
    "  Services:\n",
    "    Service Alpha   - Rs. 1000.00\n",
    "    Service Beta    - Rs.  500.00\n",
    "\n",
    "  Total:            Rs. 1500.00\n",
    "\n\n\n",
);

/// Assemble the buffer in fixed order: initialize, line spacing,
/// page length, bill text, form feed.
fn build_bill() -> PrintResult<Vec<u8>> {
    // init (2) + line spacing (2) + page length (3) + text + form feed (1)
    let total = 2 + 2 + 3 + BILL_TEXT.len() + 1;

    let mut builder = EscpBuilder::new(total)?;
    builder
        .line_spacing_1_6()
        .page_length(PAGE_LENGTH_LINES)
        .text(BILL_TEXT)
        .form_feed();
    Ok(builder.build())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bill_print=info,escp_printer=info".into()),
        )
        .init();

    let data = match build_bill() {
        Ok(data) => data,
        Err(e) => {
            // The only fatal exit: nothing has been sent to the printer yet
            tracing::error!("{}", e);
            return ExitCode::from(1);
        }
    };

    tracing::info!(
        printer = PRINTER_NAME,
        doc = DOC_NAME,
        bytes = data.len(),
        "sending bill"
    );

    #[cfg(windows)]
    {
        use escp_printer::WindowsPrinter;

        let printer = WindowsPrinter::new(PRINTER_NAME);
        // The sender logs every failure; none of them change the exit code
        let _ = printer.print_raw(DOC_NAME, &data);
    }

    #[cfg(not(windows))]
    tracing::error!("raw spooler printing requires the Windows print spooler");

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_buffer_layout() {
        let data = build_bill().unwrap();
        assert_eq!(data.len(), 2 + 2 + 3 + BILL_TEXT.len() + 1);
        // init, line spacing 1/6, page length 30
        assert_eq!(&data[..7], &[0x1B, 0x40, 0x1B, 0x32, 0x1B, 0x43, 30]);
        assert_eq!(&data[7..data.len() - 1], BILL_TEXT.as_bytes());
        assert_eq!(*data.last().unwrap(), 0x0C);
    }

    #[test]
    fn bill_text_ends_with_spacing_lines() {
        assert!(BILL_TEXT.ends_with("\n\n\n"));
    }
}
