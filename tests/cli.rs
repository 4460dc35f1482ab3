use assert_cmd::Command;
use predicates::prelude::*;

fn textassert() -> Command {
    let mut cmd = Command::cargo_bin("textassert").unwrap();
    // Keep number formatting independent of the machine running the tests
    cmd.env("LC_ALL", "C").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_join_with_last_separator() {
    textassert()
        .args(["join", "a", "b", "c", "--separator", ",", "--last-separator", "."])
        .assert()
        .success()
        .stdout("a,b.c\n");
}

#[test]
fn test_join_single_separator() {
    textassert()
        .args(["join", "a", "b", "c"])
        .assert()
        .success()
        .stdout("a,b,c\n");
}

#[test]
fn test_groups_from_argument() {
    textassert()
        .args(["groups", "--size", "2", "Group"])
        .assert()
        .success()
        .stdout("Gr\nou\np\n");
}

#[test]
fn test_groups_zero_size_rejected() {
    textassert()
        .args(["groups", "--size", "0", "Group"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--size must be a positive"));
}

#[test]
fn test_lines_from_stdin() {
    textassert()
        .arg("lines")
        .write_stdin("a\r\nb\rc\n")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_words_json() {
    textassert()
        .args(["words", "  a  b\tc ", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"operation\": \"words\""))
        .stdout(predicate::str::contains("\"c\""));
}

#[test]
fn test_words_invalid_utf8_stdin_fails() {
    textassert()
        .arg("words")
        .write_stdin(vec![b'a', b' ', b'b', 0xff, b' ', b'c'])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: failed to read standard input"));
}

#[test]
fn test_normalize_with_escaped_newline() {
    textassert()
        .args(["normalize", "--newline", "<br>"])
        .write_stdin("one\r\ntwo\nthree")
        .assert()
        .success()
        .stdout("one<br>two<br>three\n");
}

#[test]
fn test_inject_invariant_numbers() {
    textassert()
        .args(["inject", "--invariant", "{0}: {1:F2} ({2})", "pi", "3.14159", "7"])
        .assert()
        .success()
        .stdout("pi: 3.14 (7)\n");
}

#[test]
fn test_inject_out_of_range_is_contract_error() {
    textassert()
        .args(["inject", "{0} {1}", "only"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_compare_pass() {
    textassert()
        .args(["compare", "10", "10.005"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn test_compare_fail_exits_one() {
    textassert()
        .args(["compare", "1", "100", "--epsilon", "0.1", "--message", "text"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("textAbsolute difference 99 but epsilon is 0.1!"));
}

#[test]
fn test_compare_boundary_passes() {
    textassert()
        .args(["compare", "1", "1.5", "--epsilon", "0.5", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"passed\": true"))
        .stdout(predicate::str::contains("\"equivalent\": false"));
}

#[test]
fn test_compare_zero_epsilon_rejected() {
    textassert()
        .args(["compare", "1", "1", "--epsilon", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--epsilon must be a positive number"));
}

#[test]
fn test_inject_huge_precision_is_an_error() {
    textassert()
        .args(["inject", "{0:F70000}", "1.5", "--invariant"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: format specifier 'F70000'"));
}

#[test]
fn test_compare_negative_values() {
    textassert()
        .args(["compare", "-2", "-2.001"])
        .assert()
        .success();
}
