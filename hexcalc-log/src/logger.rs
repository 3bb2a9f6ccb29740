//! 日志器实现（no_std + alloc 兼容）

use crate::lock::SpinLock;
use crate::record::{Level, Record};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU8, Ordering};

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// 日志器
///
/// 通过 `Arc<Logger>` 在组件之间共享；没有全局实例。
pub struct Logger {
    level: AtomicU8,
    sinks: SpinLock<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: SpinLock::new(Vec::new()),
        })
    }

    /// 无 sink 的日志器，默认用于所有组件
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    /// 添加输出目标（构建阶段链式调用）
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.sinks.lock().push(Box::new(sink));
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// 级别已启用且至少有一个 sink
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level() && self.sink_count() > 0
    }

    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if level < self.level() {
            return;
        }

        let record = Record::new(level, target, message);
        for sink in self.sinks.lock().iter() {
            sink.write(&record);
        }
    }
}

// 链式日志器：一个 Logger 可以作为另一个 Logger 的 sink
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        if record.level < self.level() {
            return;
        }
        for sink in self.sinks.lock().iter() {
            sink.write(record);
        }
    }
}

#[cfg(feature = "std")]
/// 标准错误sink（stdout 留给计算器协议）
pub struct StderrSink;

#[cfg(feature = "std")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(feature = "std")]
/// 文件sink（追加模式）
pub struct FileSink {
    file: std::sync::Mutex<std::fs::File>,
}

#[cfg(feature = "std")]
impl FileSink {
    pub fn new(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        Ok(FileSink {
            file: std::sync::Mutex::new(file),
        })
    }
}

#[cfg(feature = "std")]
impl LogSink for FileSink {
    fn write(&self, record: &Record) {
        use std::io::Write;
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", record.format());
        }
    }
}
