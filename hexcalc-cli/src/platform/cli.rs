//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示，并在表达式下方标出出错位置。

use hexcalc_api::HexcalcError;

/// 打印错误，有偏移时显示表达式和指向出错字节的标记
pub fn print_error_with_line(e: &HexcalcError, line: &str) {
    eprintln!("❌ {}", e.to_report());
    if let Some(context) = error_context(e, line) {
        eprintln!("{}", context);
    }
}

/// 表达式上下文（两行：表达式本身和 `^` 标记）
pub fn error_context(e: &HexcalcError, line: &str) -> Option<String> {
    let offset = e.offset()?;
    if offset > line.len() {
        return None;
    }
    // offset counts bytes, the terminal counts chars
    let column = line.char_indices().take_while(|(i, _)| *i < offset).count();
    let marker: String = " ".repeat(column);
    Some(format!("  | {}\n  | {}^", line, marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcalc_api::{evaluate_line, RunConfig};

    #[test]
    fn test_context_marks_offending_byte() {
        let line = "1 + q";
        let err = evaluate_line(line, &RunConfig::default()).unwrap_err();
        assert_eq!(
            error_context(&err, line).as_deref(),
            Some("  | 1 + q\n  |     ^")
        );
    }

    #[test]
    fn test_marker_column_counts_chars() {
        use hexcalc_api::CalcError;
        use hexcalc_core::InvalidReason;

        // "é" is two bytes, the error sits at byte offset 4
        let line = "é+1z";
        let err = HexcalcError::from(CalcError::InvalidInput {
            offset: 4,
            reason: InvalidReason::UnexpectedByte(b'z'),
        });
        assert_eq!(
            error_context(&err, line).as_deref(),
            Some("  | é+1z\n  |    ^")
        );
    }

    #[test]
    fn test_no_context_without_offset() {
        let line = "f".repeat(300);
        let err = evaluate_line(&line, &RunConfig::default()).unwrap_err();
        assert!(error_context(&err, &line).is_none());
    }
}
