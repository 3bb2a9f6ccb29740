//! API 集成测试 - 单行求值、脚本会话与日志

mod common;

use common::{logged_config, strict_config};
use hexcalc_api::{evaluate_line, run_script, HexcalcConfig, Outcome, RunConfig};
use hexcalc_log::{Level, Logger};

#[test]
fn test_eval_examples() {
    let config = RunConfig::default();
    let cases = [
        ("a+b", 0x15),
        ("f-3", 0xc),
        ("-a", -0xa),
        ("--a", 0xa),
        ("", 0),
        ("ffffffff+1", 0),
    ];
    for (expr, expected) in cases {
        let output = evaluate_line(expr, &config).unwrap();
        assert_eq!(output.value, expected, "expr {:?}", expr);
    }
}

#[test]
fn test_eval_strict_mode() {
    assert_eq!(evaluate_line("7 8", &RunConfig::default()).unwrap().value, 0xf);

    let err = evaluate_line("7 8", &strict_config()).unwrap_err();
    let report = err.to_report();
    assert_eq!(report.error_kind, "MissingOperator");
    assert_eq!(report.offset, Some(2));
}

#[test]
fn test_script_transcript() {
    let output = run_script(b"a+b\rzz\r-1\r", &RunConfig::default());
    assert_eq!(
        output.outcomes,
        [Outcome::Value(0x15), Outcome::Invalid, Outcome::Value(-1)]
    );
    assert_eq!(
        output.transcript_lossy(),
        "hex> a+b\r\n00000015\r\nhex> zz\r\nInvalid input.\r\nhex> -1\r\nffffffff\r\n"
    );
    assert_eq!(output.failures(), 1);
}

#[test]
fn test_script_uses_file_config() {
    let file: HexcalcConfig =
        serde_json::from_str(r#"{ "repl": { "prompt": "? ", "echo": false } }"#).unwrap();
    let config = RunConfig::from_file_config(&file, Logger::noop());

    let output = run_script(b"1+1\r", &config);
    assert_eq!(output.transcript_lossy(), "? 00000002\r\n");
}

#[test]
fn test_session_logs_stay_out_of_transcript() {
    let (config, ring) = logged_config(Level::Debug);
    let output = run_script(b"1\rg\r", &config);

    let records = ring.dump_records();
    assert!(records
        .iter()
        .any(|r| r.target == "hexcalc::repl" && r.message == "line 2: Invalid"));
    assert!(records
        .iter()
        .any(|r| r.level == Level::Info && r.message.contains("2 lines")));

    let transcript = output.transcript_lossy();
    assert!(!transcript.contains("line 2"));
    assert!(!transcript.contains("Scripted session"));
}

#[test]
fn test_trace_level_records_tokens() {
    let (config, ring) = logged_config(Level::Trace);
    evaluate_line("1-2", &config).unwrap();

    let lexer_records = ring
        .dump_records()
        .into_iter()
        .filter(|r| r.target == "hexcalc::lexer")
        .count();
    // 1, -, 2, end of input
    assert_eq!(lexer_records, 4);
}

#[test]
fn test_quiet_logger_records_nothing() {
    let (config, ring) = logged_config(Level::Error);
    run_script(b"zz\r", &config);
    assert!(ring.is_empty());
}
