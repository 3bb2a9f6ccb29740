//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

use hexcalc_workspace::{run_script, RunConfig, SessionOutput};

/// 把多行输入拼成会话字节流，每行以 `\r` 结尾
pub fn lines(input: &[&str]) -> Vec<u8> {
    input.iter().flat_map(|line| format!("{}\r", line).into_bytes()).collect()
}

/// 用默认配置运行多行会话
pub fn run_lines(input: &[&str]) -> SessionOutput {
    run_script(&lines(input), &RunConfig::default())
}

/// 期望的单行会话输出：提示符、回显、结果
pub fn expected_line(prompt: &str, line: &str, result: &str) -> String {
    format!("{}{}\r\n{}\r\n", prompt, line, result)
}
