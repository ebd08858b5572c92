use pretty_assertions::assert_eq;
use reckon::{
    evaluate,
    interpreter::{
        session::{Outcome, Session},
        terminal::BufferTerminal,
        value::core::Value,
    },
};

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(evaluate(src), expected, "script: {src:?}");
}

fn session() -> (Session, BufferTerminal) {
    let out = BufferTerminal::default();
    (Session::new(Box::new(out.clone())), out)
}

#[test]
fn basic_arithmetic() {
    assert_output("3 + 4", &["7"]);
    assert_output("10 - 12", &["-2"]);
    assert_output("6 * 7", &["42"]);
    assert_output("1.5 + 1", &["2.5"]);
    assert_output("0.1 + 0.2", &["0.30000000000000004"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_output("2 + 3 * 4", &["14"]);
    assert_output("(2 + 3) * 4", &["20"]);
    assert_output("10 - 4 - 3", &["3"]);
    assert_output("100 / 10 / 5", &["2.0"]);
}

#[test]
fn power_binds_tighter_than_unary_minus() {
    assert_output("-2 ^ 2", &["-4"]);
    assert_output("(-2) ^ 2", &["4"]);
    assert_output("2 ^ 3 ^ 2", &["512"]);
    assert_output("2 ^ -1", &["0.5"]);
    assert_output("2 * 3 ^ 2", &["18"]);
    assert_output("--3", &["3"]);
    assert_output("+3", &["3"]);
}

#[test]
fn integer_and_float_promotion() {
    assert_output("2 ^ 10", &["1024"]);
    assert_output("2.0 ^ 2", &["4.0"]);
    assert_output("4 / 2", &["2.0"]);
    assert_output("7 / 2", &["3.5"]);
    assert_output("1e3", &["1000.0"]);
    assert_output("3 * 1.5", &["4.5"]);
    assert_output("-2.5", &["-2.5"]);
}

#[test]
fn floor_division_and_modulo_round_down() {
    assert_output("7 // 2", &["3"]);
    assert_output("-7 // 2", &["-4"]);
    assert_output("7 % 3", &["1"]);
    assert_output("-7 % 3", &["2"]);
    assert_output("7 % -3", &["-2"]);
    assert_output("7.5 // 2", &["3.0"]);
    assert_output("7.5 % 2", &["1.5"]);
}

#[test]
fn division_by_zero_falls_back_to_zero() {
    assert_output("3 / 0", &["ERR: Division by zero attempted.", "0"]);
    assert_output("3 // 0", &["ERR: Division by zero attempted.", "0"]);
    assert_output("3 % 0", &["ERR: Division by zero attempted.", "0"]);
    assert_output("3.5 / 0.0", &["ERR: Division by zero attempted.", "0"]);
    assert_output("0 ^ -1", &["ERR: Division by zero attempted.", "0"]);
    assert_output("1 + 3 / 0", &["ERR: Division by zero attempted.", "1"]);
}

#[test]
fn fallback_value_can_be_stored() {
    assert_output("x = 3 / 0\nx", &["ERR: Division by zero attempted.", "0"]);
    assert_output("x = 3 / 0\nx + 2", &["ERR: Division by zero attempted.", "2"]);
}

#[test]
fn assignment_persists_across_lines() {
    assert_output("x = 10\nx + 5", &["15"]);
    assert_output("x = 1\nx = x + 1\nx", &["2"]);
    assert_output("rate = 0.5\nrate * 4", &["2.0"]);
}

#[test]
fn names_are_case_sensitive() {
    assert_output("x = 1\nX", &["Undefined name 'X'", "0"]);
}

#[test]
fn undefined_name_is_recoverable() {
    assert_output("y", &["Undefined name 'y'", "0"]);
    assert_output("y + 1", &["Undefined name 'y'", "1"]);
    assert_output("x = y * 2\nx", &["Undefined name 'y'", "0"]);
}

#[test]
fn strings_are_stored_without_quotes() {
    assert_output("s = \"hello\"\ns", &["hello"]);
    assert_output("s = \"\"\ns == \"\"", &["true"]);
    assert_output("a = \"foo\"\nb = \"bar\"\na + b", &["foobar"]);
    assert_output("\"two words\"", &["two words"]);
}

#[test]
fn comparisons_yield_booleans() {
    assert_output("1 < 2", &["true"]);
    assert_output("2 <= 1", &["false"]);
    assert_output("3 > 2", &["true"]);
    assert_output("3 >= 3", &["true"]);
    assert_output("2 == 2.0", &["true"]);
    assert_output("2 != 2", &["false"]);
    assert_output("1 + 1 == 2", &["true"]);
    assert_output("\"a\" < \"b\"", &["true"]);
    assert_output("\"1\" == 1", &["false"]);
    assert_output("\"1\" != 1", &["true"]);
}

#[test]
fn booleans_count_as_integers_in_arithmetic() {
    assert_output("(1 < 2) + 1", &["2"]);
    assert_output("(1 > 2) * 5", &["0"]);
}

#[test]
fn unsupported_operands_fall_back_to_zero() {
    assert_output("\"a\" + 1",
                  &["ERR: Unsupported operand types for +: 'str' and 'int'.", "0"]);
    assert_output("-\"a\"", &["ERR: Bad operand type for unary -: 'str'.", "0"]);
    assert_output("\"a\" < 1",
                  &["ERR: Unsupported operand types for <: 'str' and 'int'.", "0"]);
}

#[test]
fn integer_overflow_is_reported() {
    assert_output("9223372036854775807 + 1", &["ERR: Integer overflow.", "0"]);
    assert_output("2 ^ 64", &["ERR: Integer overflow.", "0"]);
    assert_output("1 ^ 99999999999", &["1"]);
}

#[test]
fn comments_and_blank_lines_do_nothing() {
    assert_output("1 + 1 # two", &["2"]);
    assert_output("# nothing here", &[]);
    assert_output("", &[]);
    assert_output("   ", &[]);
}

#[test]
fn illegal_characters_are_skipped() {
    assert_output("3 + $4", &["Line 1: ILLEGAL character '$'", "7"]);
    assert_output("1 @ + 2", &["Line 1: ILLEGAL character '@'", "3"]);
}

#[test]
fn diagnostics_name_the_session_line() {
    let (mut session, out) = session();

    session.run_line("1");
    session.run_line("2 ? 3");

    assert_eq!(out.lines(),
               vec!["1".to_string(),
                    "Line 2: ILLEGAL character '?'".to_string(),
                    "Syntax error at line 2: extra tokens after statement, starting at 3".to_string()]);
}

#[test]
fn syntax_errors_abandon_the_line() {
    assert_output("3 +", &["Syntax error at line 1: unexpected end of input"]);
    assert_output("(1 + 2", &["Syntax error at line 1: expected closing parenthesis ')'"]);
    assert_output("3 4", &["Syntax error at line 1: extra tokens after statement, starting at 4"]);
    assert_output("x = = 3", &["Syntax error at line 1, token=="]);
    assert_output("{ 1 }", &["Syntax error at line 1, token={"]);
}

#[test]
fn failed_assignment_leaves_environment_untouched() {
    assert_output("x = 1\nx = (2\nx",
                  &["Syntax error at line 2: expected closing parenthesis ')'", "1"]);
}

#[test]
fn evaluation_is_idempotent() {
    assert_output("x = 3\nx * 2 + 1\nx * 2 + 1", &["7", "7"]);
}

#[test]
fn run_line_reports_outcomes() {
    let (mut session, _) = session();

    assert_eq!(session.run_line("x = 2"), Outcome::Stored("x".to_string()));
    assert_eq!(session.run_line("x * 2"), Outcome::Printed(Value::Integer(4)));
    assert_eq!(session.run_line("y"), Outcome::Printed(Value::Integer(0)));
    assert_eq!(session.run_line("1 +"), Outcome::Silent);
    assert_eq!(session.run_line(""), Outcome::Silent);

    assert_eq!(session.context().environment.get("x"), Some(&Value::Integer(2)));
    assert!(!session.context().environment.contains("y"));
}

#[test]
fn sessions_are_isolated() {
    let (mut first, _) = session();
    let (mut second, second_out) = session();

    first.run_line("x = 1");
    second.run_line("x");

    assert_eq!(second_out.lines(), vec!["Undefined name 'x'".to_string(), "0".to_string()]);
}

#[test]
fn info_prints_the_version() {
    let out = BufferTerminal::default();
    let mut session = Session::new(Box::new(out.clone())).with_version("0.4");

    assert_eq!(session.run_line("info"), Outcome::Silent);
    assert_eq!(out.lines(), vec!["Version 0.4".to_string()]);

    let banner = format!("Version {}", env!("CARGO_PKG_VERSION"));
    assert_output("info", &[banner.as_str()]);
}

#[test]
fn builtins_yield_unit() {
    let (mut session, out) = session();

    assert_eq!(session.run_line("v = info"), Outcome::Stored("v".to_string()));
    assert_eq!(session.run_line("v"), Outcome::Silent);
    assert_eq!(session.context().environment.get("v"), Some(&Value::Unit));
    assert_eq!(out.lines().len(), 1);
}

#[test]
fn cls_uses_the_terminal() {
    let (mut session, out) = session();

    assert_eq!(session.run_line("cls"), Outcome::Silent);
    assert_eq!(out.clear_count(), 1);
    assert!(out.lines().is_empty());
}

#[test]
fn quit_ends_the_session() {
    let (mut session, out) = session();

    assert_eq!(session.run_line("quit"), Outcome::Quit);
    assert_eq!(out.lines(), vec!["Good-Bye.".to_string()]);

    assert_output("1\nquit\n2", &["1", "Good-Bye."]);
    assert_output("x = quit\nx", &["Good-Bye."]);
}

#[test]
fn keywords_are_case_sensitive() {
    assert_output("QUIT", &["Undefined name 'QUIT'", "0"]);
    assert_output("quitter = 1\nquitter", &["1"]);
}
