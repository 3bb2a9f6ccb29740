//! stdin/stdout as a character device
//!
//! Terminals send `\n` (or `\r\n`) at the end of a line, the calculator
//! expects `\r`. Each newline becomes `\r` and the `\n` of a CRLF pair is
//! dropped. At end of input an unterminated line is completed first, then
//! the process exits with status 0. A failed read or write ends it with
//! status 1.

use hexcalc_core::CharDevice;
use hexcalc_log::{debug, Logger};
use std::io::{self, ErrorKind, Read, Write};
use std::sync::Arc;

pub struct StdioDevice<R, W> {
    reader: R,
    writer: W,
    last_was_cr: bool,
    mid_line: bool,
    /// First write failure, reported on the next read
    write_error: Option<io::Error>,
    logger: Arc<Logger>,
}

impl StdioDevice<io::StdinLock<'static>, io::StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: Read, W: Write> StdioDevice<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            last_was_cr: false,
            mid_line: false,
            write_error: None,
            logger: Logger::noop(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Next byte after newline translation, `None` at end of input
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    if self.mid_line {
                        self.mid_line = false;
                        return Ok(Some(b'\r'));
                    }
                    return Ok(None);
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }

            let was_cr = self.last_was_cr;
            self.last_was_cr = byte[0] == b'\r';
            let translated = match byte[0] {
                b'\n' if was_cr => continue,
                b'\n' => b'\r',
                other => other,
            };
            self.mid_line = translated != b'\r';
            return Ok(Some(translated));
        }
    }

    /// Flush pending output, then fetch the next byte
    ///
    /// A write failure since the last read is returned here.
    fn try_read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(e) = self.write_error.take() {
            return Err(e);
        }
        // the prompt must be visible before blocking
        self.writer.flush()?;
        self.next_byte()
    }

    fn record_write(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.write_error.get_or_insert(e);
        }
    }

    fn finish(&mut self) -> ! {
        let result = self
            .writer
            .write_all(b"\r\n")
            .and_then(|_| self.writer.flush());
        match result {
            Ok(()) => std::process::exit(0),
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, e: io::Error) -> ! {
        debug!(self.logger, target: "hexcalc::cli", "terminal i/o failed: {:?}", e);
        eprintln!("hexcalc: {}", e);
        std::process::exit(1)
    }
}

impl<R: Read, W: Write> CharDevice for StdioDevice<R, W> {
    /// # Exits
    /// The process: status 0 once input is exhausted, status 1 if stdin
    /// or stdout fails.
    fn read_byte(&mut self) -> u8 {
        match self.try_read_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => self.finish(),
            Err(e) => self.fail(e),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let result = self.writer.write_all(&[byte]);
        self.record_write(result);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let result = self.writer.write_all(bytes);
        self.record_write(result);
    }
}
