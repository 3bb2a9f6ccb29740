//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use hexcalc_core::{CalcError, InvalidReason};
use serde::Serialize;
use thiserror::Error;

/// hexcalc 错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexcalcError {
    /// 计算错误（行过长或非法输入）
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(String),
}

impl From<hexcalc_log::Error> for HexcalcError {
    fn from(err: hexcalc_log::Error) -> Self {
        match err {
            hexcalc_log::Error::Io(e) => HexcalcError::Io(e.to_string()),
            other => HexcalcError::Config(other.to_string()),
        }
    }
}

impl From<std::io::Error> for HexcalcError {
    fn from(err: std::io::Error) -> Self {
        HexcalcError::Io(err.to_string())
    }
}

impl HexcalcError {
    /// 获取出错位置（行内字节偏移，如果有）
    pub fn offset(&self) -> Option<usize> {
        match self {
            HexcalcError::Calc(CalcError::InvalidInput { offset, .. }) => Some(*offset),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            HexcalcError::Calc(e) => e.stage().as_str(),
            HexcalcError::Config(_) => "config",
            HexcalcError::Io(_) => "io",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，也可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let (error_kind, details) = match self {
            HexcalcError::Calc(CalcError::LineOverflow { capacity }) => (
                "LineOverflow",
                Some(ErrorDetails::Capacity {
                    capacity: *capacity,
                }),
            ),
            HexcalcError::Calc(CalcError::InvalidInput {
                reason: InvalidReason::UnexpectedByte(byte),
                ..
            }) => ("UnexpectedByte", Some(ErrorDetails::Byte { byte: *byte })),
            HexcalcError::Calc(CalcError::InvalidInput {
                reason: InvalidReason::MissingOperator,
                ..
            }) => ("MissingOperator", None),
            HexcalcError::Config(_) => ("ConfigError", None),
            HexcalcError::Io(_) => ("IoError", None),
        };

        ErrorReport {
            phase: self.phase(),
            offset: self.offset(),
            error_kind: error_kind.to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: reader, lexer, evaluator, config, io
    pub phase: &'static str,
    /// 行内字节偏移（0-based，如果有）
    pub offset: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// 额外详情
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// 错误额外详情
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorDetails {
    /// 触发错误的字节
    Byte { byte: u8 },
    /// 行缓冲区容量
    Capacity { capacity: usize },
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.offset {
            Some(offset) => write!(f, "[{}@{}] {}", self.phase, offset, self.message),
            None => write!(f, "[{}] {}", self.phase, self.message),
        }
    }
}
