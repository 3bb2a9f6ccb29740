//! API 类型定义
//!
//! 单行求值与脚本会话的输出类型。

use hexcalc_core::{Hex32, Outcome};

/// 单行求值输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOutput {
    /// 原始表达式
    pub expr: String,
    /// 32 位结果
    pub value: i32,
}

impl EvalOutput {
    /// Result as eight lowercase hex digits
    pub fn hex(&self) -> Hex32 {
        Hex32(self.value)
    }
}

impl std::fmt::Display for EvalOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expr, self.hex())
    }
}

/// 脚本会话输出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutput {
    /// 每一行的结果，按输入顺序
    pub outcomes: Vec<Outcome>,
    /// 设备收到的全部字节（提示符、回显、结果、诊断）
    pub transcript: Vec<u8>,
}

impl SessionOutput {
    /// Transcript decoded as UTF-8, invalid sequences replaced
    pub fn transcript_lossy(&self) -> String {
        String::from_utf8_lossy(&self.transcript).into_owned()
    }

    /// Values of the lines that evaluated
    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Value(value) => Some(*value),
            _ => None,
        })
    }

    /// Number of rejected lines
    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome, Outcome::Value(_)))
            .count()
    }
}
