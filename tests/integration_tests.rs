//! 集成测试 - 端到端会话

mod common;

use common::{expected_line, lines, run_lines};
use hexcalc_workspace::{
    core::hex::format_hex32, core::Lexer, core::Token, evaluate_line, run_script, HexcalcConfig,
    Outcome, ReplConfig, RunConfig, DEFAULT_LINE_CAPACITY,
};

#[test]
fn test_documented_examples() {
    let cases = [
        ("a+b", "00000015"),
        ("f-3", "0000000c"),
        ("7", "00000007"),
        ("-a", "fffffff6"),
        ("--a", "0000000a"),
        ("---a", "fffffff6"),
        ("", "00000000"),
        ("zz", "Invalid input."),
    ];
    for (line, result) in cases {
        let session = run_lines(&[line]);
        assert_eq!(
            session.transcript_lossy(),
            expected_line("hex> ", line, result),
            "line {:?}",
            line
        );
    }
}

#[test]
fn test_session_recovers_after_each_error() {
    let too_long = "f".repeat(DEFAULT_LINE_CAPACITY);
    let session = run_lines(&["1", &too_long, "2", "1 ? 2", "3"]);
    assert_eq!(
        session.outcomes,
        [
            Outcome::Value(1),
            Outcome::Overflow,
            Outcome::Value(2),
            Outcome::Invalid,
            Outcome::Value(3)
        ]
    );
    assert_eq!(session.values().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_capacity_boundary() {
    let fits = "0".repeat(DEFAULT_LINE_CAPACITY - 2);
    let rejected = "0".repeat(DEFAULT_LINE_CAPACITY - 1);
    let session = run_lines(&[&fits, &rejected]);
    assert_eq!(session.outcomes, [Outcome::Value(0), Outcome::Overflow]);
    assert!(session
        .transcript_lossy()
        .ends_with("\r\nInput too long.\r\n"));
}

#[test]
fn test_printed_results_lex_back() {
    let session = run_lines(&["7fffffff+1", "0-1", "dead-beef", "12345678"]);
    for value in session.values() {
        let printed = format_hex32(value);
        assert_eq!(Lexer::new(&printed).next_token(), Token::Number(value));
    }
}

#[test]
fn test_config_file_drives_session() {
    let file: HexcalcConfig = serde_json::from_str(
        r#"{ "repl": { "prompt": "> ", "strict_operators": true }, "log_level": "warn" }"#,
    )
    .unwrap();
    let config = RunConfig::from_file_config(&file, hexcalc_workspace::log::Logger::noop());

    let session = run_script(&lines(&["7 8", "7+8"]), &config);
    assert_eq!(
        session.transcript_lossy(),
        "> 7 8\r\nInvalid input.\r\n> 7+8\r\n0000000f\r\n"
    );
}

#[test]
fn test_eval_and_session_agree() {
    let config = RunConfig {
        repl: ReplConfig::default(),
        ..RunConfig::default()
    };
    for expr in ["1+2+3", "-f", "ffffffff+ffffffff", "  a -  -b "] {
        let value = evaluate_line(expr, &config).unwrap().value;
        let session = run_script(&lines(&[expr]), &config);
        assert_eq!(session.outcomes, [Outcome::Value(value)], "expr {:?}", expr);
    }
}
