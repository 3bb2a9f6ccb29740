//! Fixed-capacity line reader
//!
//! A line is read byte by byte until `\r`. Every byte is echoed, plus an
//! injected `\n` after the terminator, so the remote terminal stays in step.
//! Bytes that do not fit are still consumed and echoed but discarded, and
//! the line is then rejected as a whole.

use alloc::sync::Arc;
use hexcalc_config::{Stage, DEFAULT_LINE_CAPACITY};
use hexcalc_log::{debug, Logger};

use crate::device::CharDevice;
use crate::error::CalcError;

/// Line storage: `N` bytes, one of them reserved for the terminator
pub struct LineBuffer<const N: usize = DEFAULT_LINE_CAPACITY> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored bytes, terminator excluded
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Store `byte` if there is room, keeping the terminator slot free
    fn push(&mut self, byte: u8) -> bool {
        if self.len + 1 < N {
            self.bytes[self.len] = byte;
            self.len += 1;
            true
        } else {
            false
        }
    }

    fn terminate(&mut self) {
        if self.len < N {
            self.bytes[self.len] = 0;
        }
    }
}

pub struct LineReader {
    echo: bool,
    logger: Arc<Logger>,
}

impl Default for LineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self { echo: true, logger }
    }

    /// Echo received bytes back to the device (on by default)
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Read one `\r`-terminated line into `buffer`
    ///
    /// Returns the number of bytes stored. A line that reaches the buffer
    /// capacity (`len + 1 >= N`) is reported as `LineOverflow` after
    /// "Input too long." has been written; its content must not be used.
    pub fn read_line<D: CharDevice, const N: usize>(
        &self,
        device: &mut D,
        buffer: &mut LineBuffer<N>,
    ) -> Result<usize, CalcError> {
        buffer.clear();
        let mut received = 0usize;

        loop {
            let byte = device.read_byte();
            if self.echo {
                device.write_byte(byte);
            }
            #[cfg(feature = "trace_bytes")]
            hexcalc_log::trace!(self.logger, target: Stage::Reader.target(), "byte {:#04x}", byte);

            if byte == b'\r' {
                if self.echo {
                    device.write_byte(b'\n');
                }
                break;
            }
            received += 1;
            buffer.push(byte);
        }

        if buffer.len() + 1 >= N {
            debug!(
                self.logger,
                target: Stage::Reader.target(),
                "line overflow: {} bytes received, capacity {}",
                received,
                N
            );
            let err = CalcError::LineOverflow { capacity: N };
            device.write_str(err.diagnostic());
            return Err(err);
        }

        buffer.terminate();
        Ok(buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MemoryDevice;

    #[test]
    fn test_reads_and_echoes_line() {
        let mut device = MemoryDevice::with_input(b"1+2\r");
        let mut buffer: LineBuffer = LineBuffer::new();

        let len = LineReader::new().read_line(&mut device, &mut buffer);

        assert_eq!(len, Ok(3));
        assert_eq!(buffer.as_bytes(), b"1+2");
        assert_eq!(device.output(), b"1+2\r\n");
    }

    #[test]
    fn test_empty_line() {
        let mut device = MemoryDevice::with_input(b"\r");
        let mut buffer = LineBuffer::<8>::new();

        assert_eq!(LineReader::new().read_line(&mut device, &mut buffer), Ok(0));
        assert!(buffer.is_empty());
        assert_eq!(device.output(), b"\r\n");
    }

    #[test]
    fn test_stops_at_first_carriage_return() {
        let mut device = MemoryDevice::with_input(b"a\rb\r");
        let mut buffer = LineBuffer::<8>::new();
        let reader = LineReader::new();

        assert_eq!(reader.read_line(&mut device, &mut buffer), Ok(1));
        assert_eq!(buffer.as_bytes(), b"a");
        assert_eq!(device.pending_input(), 2);

        assert_eq!(reader.read_line(&mut device, &mut buffer), Ok(1));
        assert_eq!(buffer.as_bytes(), b"b");
    }

    #[test]
    fn test_longest_accepted_line() {
        // capacity 8 stores at most 6 bytes before the check trips
        let mut device = MemoryDevice::with_input(b"123456\r");
        let mut buffer = LineBuffer::<8>::new();

        assert_eq!(LineReader::new().read_line(&mut device, &mut buffer), Ok(6));
    }

    #[test]
    fn test_line_filling_capacity_overflows() {
        let mut device = MemoryDevice::with_input(b"1234567\r");
        let mut buffer = LineBuffer::<8>::new();

        let result = LineReader::new().read_line(&mut device, &mut buffer);

        assert_eq!(result, Err(CalcError::LineOverflow { capacity: 8 }));
        assert_eq!(device.output(), b"1234567\r\nInput too long.\r\n");
    }

    #[test]
    fn test_overflow_consumes_whole_line() {
        let mut device = MemoryDevice::with_input(b"0123456789abcdef\r7\r");
        let mut buffer = LineBuffer::<8>::new();
        let reader = LineReader::new();

        assert!(reader.read_line(&mut device, &mut buffer).is_err());
        assert_eq!(buffer.len(), 7);
        assert_eq!(buffer.as_bytes(), b"0123456");

        // the next line starts cleanly after the rejected one
        assert_eq!(reader.read_line(&mut device, &mut buffer), Ok(1));
        assert_eq!(buffer.as_bytes(), b"7");
    }

    #[test]
    fn test_without_echo() {
        let mut device = MemoryDevice::with_input(b"ff\r");
        let mut buffer = LineBuffer::<8>::new();

        let reader = LineReader::new().echo(false);
        assert_eq!(reader.read_line(&mut device, &mut buffer), Ok(2));
        assert!(device.output().is_empty());
    }

    #[test]
    fn test_overflow_is_logged() {
        use hexcalc_log::{Level, LogRingBuffer};

        let ring = LogRingBuffer::new(8);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());
        let mut device = MemoryDevice::with_input(b"123456789\r");
        let mut buffer = LineBuffer::<4>::new();

        let result = LineReader::with_logger(logger).read_line(&mut device, &mut buffer);

        assert!(result.is_err());
        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "hexcalc::reader");
        assert!(records[0].message.contains("9 bytes received, capacity 4"));
    }

    #[cfg(feature = "trace_bytes")]
    #[test]
    fn test_every_byte_is_traced() {
        use hexcalc_log::{Level, LogRingBuffer};

        let ring = LogRingBuffer::new(16);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        let mut device = MemoryDevice::with_input(b"a+1\r");
        let mut buffer = LineBuffer::<8>::new();

        assert_eq!(
            LineReader::with_logger(logger).read_line(&mut device, &mut buffer),
            Ok(3)
        );

        let records = ring.dump_records();
        let messages: alloc::vec::Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["byte 0x61", "byte 0x2b", "byte 0x31", "byte 0x0d"]);
        assert!(records
            .iter()
            .all(|r| r.level == Level::Trace && r.target == "hexcalc::reader"));
    }
}
