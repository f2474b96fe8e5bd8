use std::io::Cursor;

use jnr::{interpreter::dialect::Dialect, parse_program, run_program};

/// Runs a script and returns everything it wrote, feeding `stdin` to its
/// `ask`/`input` statements. Errors are returned as their rendered message.
fn run_with(src: &str, dialect: Dialect, stdin: &str) -> Result<String, String> {
    let mut input = Cursor::new(stdin.to_owned());
    let mut output = Vec::new();

    match run_program(src, dialect, &mut input, &mut output) {
        Ok(()) => Ok(String::from_utf8(output).expect("output is valid UTF-8")),
        Err(e) => Err(e.to_string()),
    }
}

fn assert_output(src: &str, expected: &str) {
    match run_with(src, Dialect::Show, "") {
        Ok(output) => assert_eq!(output, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\nscript: {src}"),
    }
}

fn assert_failure(src: &str, needle: &str) {
    match run_with(src, Dialect::Show, "") {
        Ok(output) => panic!("Script succeeded (output {output:?}) but was expected to fail\nscript: {src}"),
        Err(e) => assert!(e.contains(needle),
                          "expected error containing {needle:?}, got: {e}\nscript: {src}"),
    }
}

#[test]
fn assignment_and_show_round_trip_literals() {
    assert_output("x = 42\nshow x", "42\n");
    assert_output("x = 0\nshow x", "0\n");
    assert_output("x = 3.5\nshow x", "3.5\n");
    assert_output("c = 'q'\nshow c", "q\n");
}

#[test]
fn basic_arithmetic() {
    assert_output("show 2 + 3", "5\n");
    assert_output("show 8 - 5", "3\n");
    assert_output("show 7 * 9", "63\n");
    assert_output("show 10 / 2", "5\n");
    assert_output("show 7 % 3", "1\n");
}

#[test]
fn operator_precedence() {
    assert_output("show 2 + 3 * 4", "14\n");
    assert_output("show (2 + 3) * 4", "20\n");
    assert_output("show 10 - 4 - 3", "3\n");
    assert_output("show 2 * 3 % 4", "2\n");
}

#[test]
fn unary_negation() {
    assert_output("show -5 + 3", "-2\n");
    assert_output("show -(2 + 3)", "-5\n");
    assert_output("show 2 - -3", "5\n");
    assert_output("x = -7\nshow x * -1", "7\n");
}

#[test]
fn integer_division_truncates() {
    assert_output("show 7 / 2", "3\n");
    assert_output("show -7 / 2", "-3\n");
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_failure("show 7 / 0", "Division by zero");
    assert_failure("show 7 % 0", "Division by zero");
    assert_failure("show 1.5 / 0", "Division by zero");
}

#[test]
fn division_by_zero_produces_no_output_line() {
    let mut input = Cursor::new(String::new());
    let mut output = Vec::new();
    let result = run_program("show 1\nshow 7 / 0", Dialect::Show, &mut input, &mut output);

    assert!(result.is_err());
    // The first statement's line survives; the failing one wrote nothing.
    assert_eq!(output, b"1\n");
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    assert_output("show 1 + 2.5", "3.5\n");
    assert_output("show 7 / 2.0", "3.5\n");
    assert_output("x = 2\nshow x * 1.5", "3\n");
}

#[test]
fn comparisons_yield_integer_truth_values() {
    assert_output("show 3 < 5", "1\n");
    assert_output("show 5 < 3", "0\n");
    assert_output("show 3 <= 3", "1\n");
    assert_output("show 4 >= 5", "0\n");
    assert_output("show 2 == 2", "1\n");
    assert_output("show 2 != 2", "0\n");
    assert_output("show 1 + 1 == 2", "1\n");
    assert_output("show 2 < 1.5", "0\n");
}

#[test]
fn character_comparisons() {
    assert_output("show 'a' < 'b'", "1\n");
    assert_output("show 'a' == 'a'", "1\n");
    assert_output("c = 'x'\nshow c != 'y'", "1\n");
}

#[test]
fn chained_comparisons_are_rejected() {
    assert_failure("show 1 < 2 < 3", "cannot be chained");
    assert_failure("show 1 == 1 == 1", "cannot be chained");
}

#[test]
fn unbound_variable_read_fails() {
    assert_failure("show y", "Unbound variable 'y'");
    assert_failure("x = y + 1", "Unbound variable 'y'");
}

#[test]
fn character_operands_reject_arithmetic() {
    assert_failure("show 'a' + 1", "Type mismatch");
    assert_failure("show -'a'", "Type mismatch");
    assert_failure("show 'a' < 1", "Type mismatch");
}

#[test]
fn variable_type_is_fixed_by_first_binding() {
    assert_failure("x = 1\nx = 'a'", "Type mismatch");
    assert_failure("c = 'a'\nc = 2.5", "Type mismatch");
    // Re-binding with the same type is fine.
    assert_output("x = 1\nx = 2\nshow x", "2\n");
}

#[test]
fn char_bound_to_int_variable_fails_before_use() {
    let result = run_with("int ask x\nx = 'q'\nshow x + 1", Dialect::Show, "3\n");
    let err = result.expect_err("binding a char to an int variable should fail");
    assert!(err.contains("Type mismatch"), "got: {err}");
}

#[test]
fn integer_widens_into_real_variable() {
    assert_output("x = 1.5\nx = 2\nshow x + 0.25", "2.25\n");
}

#[test]
fn integer_overflow_is_detected() {
    assert_failure("show 9223372036854775807 + 1", "overflow");
    assert_failure("x = 0 - 9223372036854775807\nshow x - 2", "overflow");
}

#[test]
fn ask_reads_typed_input() {
    assert_eq!(run_with("int ask x\nshow x + 1", Dialect::Show, "41\n"),
               Ok("42\n".to_string()));
    assert_eq!(run_with("real ask x\nshow x * 2", Dialect::Show, "1.25\n"),
               Ok("2.5\n".to_string()));
    assert_eq!(run_with("char ask c\nshow c == 'y'", Dialect::Show, "y\n"),
               Ok("1\n".to_string()));
}

#[test]
fn ask_without_type_infers_from_input() {
    assert_eq!(run_with("ask x\nshow x + 1", Dialect::Show, "4\n"),
               Ok("5\n".to_string()));
    assert_eq!(run_with("ask x\nshow x + 1", Dialect::Show, "4.5\n"),
               Ok("5.5\n".to_string()));
    assert_eq!(run_with("ask c\nshow c", Dialect::Show, "z\n"),
               Ok("z\n".to_string()));
}

#[test]
fn ask_uses_existing_declaration() {
    // x is already real, so plain `ask` converts "2" to a real value.
    assert_eq!(run_with("x = 0.5\nask x\nshow x + 0.5", Dialect::Show, "2\n"),
               Ok("2.5\n".to_string()));
}

#[test]
fn ask_rejects_conflicting_declaration() {
    let err = run_with("int ask x\nreal ask x", Dialect::Show, "1\n2\n").unwrap_err();
    assert!(err.contains("Type mismatch"), "got: {err}");
}

#[test]
fn malformed_input_fails() {
    let err = run_with("int ask x", Dialect::Show, "hello\n").unwrap_err();
    assert!(err.contains("Cannot convert input 'hello' to int"), "got: {err}");

    let err = run_with("char ask c", Dialect::Show, "xyz\n").unwrap_err();
    assert!(err.contains("Cannot convert input 'xyz' to char"), "got: {err}");
}

#[test]
fn exhausted_input_fails() {
    let err = run_with("ask x", Dialect::Show, "").unwrap_err();
    assert!(err.contains("Input ended"), "got: {err}");
}

#[test]
fn empty_lines_are_skipped() {
    assert_output("\n\nx = 1\n\n\nshow x\n\n", "1\n");
}

#[test]
fn bare_expression_statement_discards_its_result() {
    assert_output("1 + 2\nshow 9", "9\n");
    // An erroring bare expression still stops the run.
    assert_failure("1 / 0\nshow 9", "Division by zero");
}

#[test]
fn one_line_per_show_statement() {
    assert_output("show 1\nshow 2\nshow 3", "1\n2\n3\n");
}

#[test]
fn print_dialect_uses_legacy_keywords() {
    assert_eq!(run_with("print 2 + 3", Dialect::Print, ""), Ok("5\n".to_string()));
    assert_eq!(run_with("input x\nprint x * 2", Dialect::Print, "21\n"),
               Ok("42\n".to_string()));
    assert_eq!(run_with("int input x\nprint x", Dialect::Print, "7\n"),
               Ok("7\n".to_string()));
}

#[test]
fn print_dialect_rejects_show_spelling_and_comparisons() {
    let err = run_with("show 1", Dialect::Print, "").unwrap_err();
    assert!(err.contains("'print'"), "got: {err}");

    let err = run_with("ask x", Dialect::Print, "1\n").unwrap_err();
    assert!(err.contains("'input'"), "got: {err}");

    // No relational operators in the first grammar revision.
    assert!(run_with("print 1 < 2", Dialect::Print, "").is_err());
}

#[test]
fn show_dialect_rejects_legacy_spelling() {
    let err = run_with("print 1", Dialect::Show, "").unwrap_err();
    assert!(err.contains("'show'"), "got: {err}");
}

#[test]
fn show_list_dialect_accepts_comma_separated_expressions() {
    assert_eq!(run_with("show 1, 2, 1 + 2", Dialect::ShowList, ""),
               Ok("1 2 3\n".to_string()));
    assert_eq!(run_with("x = 2\nshow x, x * x", Dialect::ShowList, ""),
               Ok("2 4\n".to_string()));
}

#[test]
fn show_dialect_rejects_comma_lists() {
    let err = run_with("show 1, 2", Dialect::Show, "").unwrap_err();
    assert!(err.contains("Extra tokens"), "got: {err}");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_failure("show 1 2", "Extra tokens");
    assert_failure("x = 1 y", "Extra tokens");
}

#[test]
fn lexer_reports_bad_characters_and_literals() {
    assert_failure("show $", "Unrecognized character");
    assert_failure("c = 'ab'", "Malformed literal");
    assert_failure("x = 99999999999999999999999999", "Malformed literal");
}

#[test]
fn parser_reports_structural_errors() {
    assert_failure("show (1 + 2", "closing parenthesis");
    assert_failure("x =", "end of input");
    assert_failure("show 1 +", "end of input");
}

#[test]
fn truncated_typed_ask_reports_the_keyword_line() {
    let err = parse_program("\n\nint", Dialect::Show).expect_err("statement is incomplete");
    assert!(err.to_string().contains("line 3"), "got: {err}");
}

#[test]
fn relational_longest_match_lexing() {
    // `<=` must lex as one token, not `<` followed by `=`.
    assert_output("show 3 <= 3", "1\n");
    assert_output("show 3 >= 4", "0\n");
    assert_output("show 3 != 4", "1\n");
}

/// Parsing the pretty-printed form of a program must yield a structurally
/// identical program (ignoring line numbers, which the printer collapses).
fn assert_print_parse_round_trip(src: &str, dialect: Dialect) {
    let program = parse_program(src, dialect).expect("source parses");
    let printed = program.iter()
                         .map(|statement| statement.display_with(dialect).to_string())
                         .collect::<Vec<_>>()
                         .join("\n");
    let reparsed = parse_program(&printed, dialect).expect("printed form parses");

    assert_eq!(program, reparsed, "printed form: {printed}");
}

#[test]
fn parse_print_parse_is_idempotent() {
    assert_print_parse_round_trip("show 2 + 3 * 4", Dialect::Show);
    assert_print_parse_round_trip("show (2 + 3) * 4", Dialect::Show);
    assert_print_parse_round_trip("x = -(1 + 2)\nshow x < 10", Dialect::Show);
    assert_print_parse_round_trip("show 1 - (2 - 3)", Dialect::Show);
    assert_print_parse_round_trip("x = 2.5\nc = 'a'\nshow x != 2.0", Dialect::Show);
    assert_print_parse_round_trip("int ask x\nask y\nshow x % y", Dialect::Show);
    assert_print_parse_round_trip("show 1, 2 * (3 + 4), 5", Dialect::ShowList);
    assert_print_parse_round_trip("show --5", Dialect::Show);
}

#[test]
fn round_trip_keeps_parentheses_around_comparison_operands() {
    // Comparisons are non-associative, so a comparison used as an operand of
    // another comparison must keep its parentheses when printed.
    assert_print_parse_round_trip("show (1 < 2) < 3", Dialect::Show);
    assert_print_parse_round_trip("show (1 == 1) == 1", Dialect::Show);
    assert_print_parse_round_trip("x = (1 < 2) >= 0\nshow x", Dialect::Show);
}

#[test]
fn round_trip_prints_each_dialects_own_keywords() {
    assert_print_parse_round_trip("print 1 + 2", Dialect::Print);
    assert_print_parse_round_trip("input x\nint input y\nprint x + y", Dialect::Print);
    assert_print_parse_round_trip("char ask c\nshow c, c", Dialect::ShowList);
}
