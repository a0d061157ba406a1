//! ESC/P command builder
//!
//! Builds raw command buffers for Epson dot-matrix printers (ESC/P).
//! Unlike ESC/POS thermal printers there is no cutter; a page is finished
//! with a form feed that ejects the sheet.

use crate::error::{PrintError, PrintResult};

/// ESC/P command buffer builder
///
/// The buffer starts with ESC @ (initialize) and grows by appending
/// commands and verbatim text bytes. Text is never re-encoded or escaped,
/// so payload bytes that happen to match control codes pass through as is.
pub struct EscpBuilder {
    buf: Vec<u8>,
}

impl EscpBuilder {
    /// Create a builder with an exact pre-reserved capacity
    ///
    /// Allocation failure is reported instead of aborting the process, so
    /// a caller can bail out cleanly before touching the printer.
    pub fn new(capacity: usize) -> PrintResult<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| PrintError::Allocation { bytes: capacity })?;
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Ok(Self { buf })
    }

    // === Printer Setup ===

    /// Set line spacing to 1/6 inch (ESC 2)
    pub fn line_spacing_1_6(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x32]);
        self
    }

    /// Set line spacing to 1/8 inch (ESC 0)
    pub fn line_spacing_1_8(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x30]);
        self
    }

    /// Set page length to `lines` lines (ESC C n)
    ///
    /// At 6 lines per inch, 30 lines is a 5-inch page. The printer treats
    /// n = 0 as invalid; callers pass 1-255.
    pub fn page_length(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x43, lines]);
        self
    }

    // === Text Output ===

    /// Append text verbatim
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Append text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(b'\n');
        self
    }

    // === Paper Control ===

    /// Eject the current page (FF)
    pub fn form_feed(&mut self) -> &mut Self {
        self.buf.push(0x0C);
        self
    }

    // === Raw Commands ===

    /// Append raw bytes directly
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    // === Build ===

    /// Current buffer length in bytes
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty (it never is; init bytes come first)
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the builder and return the assembled buffer
    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_init() {
        let buf = EscpBuilder::new(16).unwrap().build();
        assert_eq!(buf, vec![0x1B, 0x40]);
    }

    #[test]
    fn page_length_is_three_bytes_for_any_line_count() {
        for n in 1..=255u8 {
            let mut b = EscpBuilder::new(8).unwrap();
            b.page_length(n);
            let buf = b.build();
            assert_eq!(&buf[2..], &[0x1B, 0x43, n]);
        }
    }

    #[test]
    fn line_spacing_commands() {
        let mut b = EscpBuilder::new(8).unwrap();
        b.line_spacing_1_6().line_spacing_1_8();
        assert_eq!(&b.build()[2..], &[0x1B, 0x32, 0x1B, 0x30]);
    }

    #[test]
    fn total_length_is_sum_of_segments() {
        let text = "Rs. 1500.00";
        let mut b = EscpBuilder::new(2 + 2 + 3 + text.len() + 1).unwrap();
        b.line_spacing_1_6().page_length(30).text(text).form_feed();
        let buf = b.build();
        assert_eq!(buf.len(), 19);
    }

    #[test]
    fn text_bytes_pass_through_unescaped() {
        // Payload bytes that collide with control codes are not escaped
        let mut b = EscpBuilder::new(8).unwrap();
        b.text("\x1b@\x0c");
        assert_eq!(&b.build()[2..], &[0x1B, 0x40, 0x0C]);
    }

    #[test]
    fn line_appends_newline() {
        let mut b = EscpBuilder::new(16).unwrap();
        b.line("total");
        assert_eq!(&b.build()[2..], b"total\n");
    }
}
