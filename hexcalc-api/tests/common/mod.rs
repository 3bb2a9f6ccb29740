//! 测试辅助工具

use hexcalc_api::RunConfig;
use hexcalc_log::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// 带环形缓冲区日志的配置，便于断言日志内容
pub fn logged_config(level: Level) -> (RunConfig, Arc<LogRingBuffer>) {
    let ring = LogRingBuffer::new(256);
    let logger = Logger::new(level).with_sink(ring.clone());
    (RunConfig::default().with_logger(logger), ring)
}

/// 严格模式配置
pub fn strict_config() -> RunConfig {
    let mut config = RunConfig::default();
    config.repl.strict_operators = true;
    config
}
