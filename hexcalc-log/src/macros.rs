//! 日志宏实现（no_std 兼容）
//!
//! 第一个参数是 logger；可选的 `target: "..."` 覆盖默认的 `module_path!()`。

#[macro_export]
macro_rules! trace {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, target: $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, target: $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, target: $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, target: $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, target: $target:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, target: $target, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// 通用日志宏：先检查级别，只有启用时才格式化消息
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, target: $target:expr, $($arg:tt)+) => {{
        let level = $level;
        if $logger.is_enabled(level) {
            $logger.log(level, $target, $crate::__private::format!($($arg)+));
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $level, target: module_path!(), $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Level, LogRingBuffer, Logger};

    #[test]
    fn test_default_target_is_module_path() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());

        trace!(logger, "byte {:#04x}", 0x37);

        let records = ring.dump_records();
        assert_eq!(records[0].target, module_path!());
        assert_eq!(records[0].message, "byte 0x37");
    }

    #[test]
    fn test_explicit_target() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());

        debug!(logger, target: "hexcalc::evaluator", "accumulator = {}", -3);

        let records = ring.dump_records();
        assert_eq!(records[0].target, "hexcalc::evaluator");
        assert_eq!(records[0].message, "accumulator = -3");
    }

    #[test]
    fn test_level_filtering_in_macros() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        trace!(logger, "trace msg");
        debug!(logger, "debug msg");
        info!(logger, target: "hexcalc::cli", "info msg");
        warn!(logger, "warn msg");
        error!(logger, target: "hexcalc::cli", "error msg");

        let levels: alloc::vec::Vec<_> = ring.dump_records().iter().map(|r| r.level).collect();
        assert_eq!(levels, [Level::Warn, Level::Error]);
    }

    #[test]
    fn test_arguments_not_evaluated_when_disabled() {
        let logger = Logger::noop();
        let mut evaluated = false;
        let mut probe = || {
            evaluated = true;
            1
        };

        error!(logger, "value {}", probe());

        assert!(!evaluated);
    }
}
