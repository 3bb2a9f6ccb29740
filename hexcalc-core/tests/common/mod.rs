//! 测试辅助工具
//!
//! 在内存设备上跑完整的 REPL 会话，返回逐行结果与设备输出

use hexcalc_core::{MemoryDevice, Outcome, Repl, ReplConfig};

/// 一次会话的结果
pub struct Transcript {
    pub outcomes: Vec<Outcome>,
    pub output: String,
}

/// 用默认配置运行 `input`，直到输入耗尽
pub fn run_session(input: &[u8]) -> Transcript {
    run_session_with(input, ReplConfig::default())
}

pub fn run_session_with(input: &[u8], config: ReplConfig) -> Transcript {
    let mut repl = Repl::with_config(MemoryDevice::with_input(input), config);
    let mut outcomes = Vec::new();
    while repl.device().has_input() {
        outcomes.push(repl.process_one());
    }
    Transcript {
        outcomes,
        output: repl.device().output_lossy(),
    }
}

/// 单行求值，返回该行的结果
pub fn eval_line(line: &str) -> Outcome {
    let input = format!("{}\r", line);
    let transcript = run_session(input.as_bytes());
    assert_eq!(transcript.outcomes.len(), 1, "expected exactly one line");
    transcript.outcomes[0]
}
