//! 日志专用环形缓冲区（no_std + alloc 兼容）

use crate::lock::SpinLock;
use crate::logger::LogSink;
use crate::record::Record;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

/// 环形缓冲区统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RingBufferStats {
    pub record_count: usize,
    /// 因缓冲区满而被覆盖的记录数
    pub dropped_count: usize,
    pub capacity: usize,
}

/// 日志环形缓冲区
///
/// 满了以后覆盖最旧的记录（FIFO），用于崩溃时转储最近的日志。
pub struct LogRingBuffer {
    records: SpinLock<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            records: SpinLock::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    fn push(&self, record: Record) {
        if self.capacity == 0 {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let mut records = self.records.lock();
        if records.len() >= self.capacity {
            records.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        records.push_back(record);
    }

    /// 按时间顺序返回当前所有记录
    pub fn dump_records(&self) -> Vec<Record> {
        self.records.lock().iter().cloned().collect()
    }

    /// 转储为多行文本
    pub fn dump(&self) -> String {
        self.records
            .lock()
            .iter()
            .map(Record::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&self) {
        self.records.lock().clear();
        self.dropped.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped_count(),
            capacity: self.capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use alloc::format;

    #[test]
    fn test_basic_operations() {
        let buffer = LogRingBuffer::new(3);
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);

        buffer.push(Record::new(Level::Info, "hexcalc::repl", "line 1"));
        buffer.push(Record::new(Level::Info, "hexcalc::repl", "line 2"));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.dropped_count(), 0);
    }

    #[test]
    fn test_overflow_keeps_latest() {
        let buffer = LogRingBuffer::new(3);

        for i in 0..5 {
            buffer.push(Record::new(Level::Debug, "hexcalc::evaluator", format!("result {i}")));
        }

        let messages: Vec<_> = buffer
            .dump_records()
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert_eq!(messages, ["result 2", "result 3", "result 4"]);
        assert_eq!(buffer.dropped_count(), 2);
    }

    #[test]
    fn test_zero_capacity_drops_everything() {
        let buffer = LogRingBuffer::new(0);
        buffer.push(Record::new(Level::Error, "hexcalc::repl", "gone"));
        assert!(buffer.is_empty());
        assert_eq!(buffer.dropped_count(), 1);
    }

    #[test]
    fn test_dump_and_clear() {
        let buffer = LogRingBuffer::new(10);
        buffer.push(Record::new(Level::Info, "hexcalc::cli", "session started"));
        buffer.push(Record::new(Level::Warn, "hexcalc::reader", "Input too long."));

        let dump = buffer.dump();
        assert_eq!(dump.lines().count(), 2);
        assert!(dump.contains("INFO hexcalc::cli: session started"));
        assert!(dump.contains("WARN hexcalc::reader: Input too long."));

        buffer.clear();
        assert_eq!(
            buffer.stats(),
            RingBufferStats {
                record_count: 0,
                dropped_count: 0,
                capacity: 10
            }
        );
    }

    #[test]
    fn test_sink_through_arc() {
        let buffer = LogRingBuffer::new(10);
        let record = Record::new(Level::Trace, "hexcalc::lexer", "token Plus");

        LogSink::write(&buffer, &record);
        LogSink::write(&*buffer, &record);

        assert_eq!(buffer.len(), 2);
    }
}
