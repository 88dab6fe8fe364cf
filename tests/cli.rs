use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CORPUS: &str = "it was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of light, it was the season of darkness.\n";

#[allow(deprecated)]
fn cipher_tool() -> Command {
    let mut cmd = Command::cargo_bin("cipher_tool").expect("binary");
    cmd.env_remove("CIPHER_ALPHABET")
        .env_remove("CIPHER_SYMBOLS")
        .env("RUST_LOG", "warn");
    cmd
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn caesar_file_round_trip() {
    let temp = tempdir().unwrap();
    let plain = temp.path().join("plain.txt");
    let encoded = temp.path().join("encoded.txt");
    let decoded = temp.path().join("decoded.txt");
    fs::write(&plain, "Hello, World!\nSecond line.\n").unwrap();

    cipher_tool()
        .args(["encode", "--cipher", "caesar", "--key", "-5"])
        .args(["--input_file", path_arg(&plain), "--output_file", path_arg(&encoded)])
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&encoded).unwrap(), "Hello, World!\nSecond line.\n");

    cipher_tool()
        .args(["decode", "--cipher", "caesar", "--key", "-5"])
        .args(["--input_file", path_arg(&encoded), "--output_file", path_arg(&decoded)])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&decoded).unwrap(),
        "Hello, World!\nSecond line.\n"
    );
}

#[test]
fn vigenere_streams_stdin_to_stdout() {
    cipher_tool()
        .args(["--alphabet", "english-lower"])
        .args(["encode", "--cipher", "vigenere", "--key", "lemon"])
        .write_stdin("attack at dawn")
        .assert()
        .success()
        .stdout("lxfopv ef rnhr");
}

#[test]
fn default_alphabet_keeps_case() {
    cipher_tool()
        .args(["encode", "--cipher", "caesar", "--key", "3"])
        .write_stdin("Xyz")
        .assert()
        .success()
        .stdout("Abc");

    cipher_tool()
        .args(["encode", "--cipher", "vigenere", "--key", "key"])
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("Rijvs");
}

#[test]
fn single_cycle_latin_wraps_across_case() {
    cipher_tool()
        .args(["--alphabet", "latin", "encode", "--cipher", "caesar", "--key", "3"])
        .write_stdin("Xyz")
        .assert()
        .success()
        .stdout("aBC");
}

#[test]
fn custom_symbols_override_preset() {
    cipher_tool()
        .args(["--symbols", "abc", "encode", "--cipher", "caesar", "--key", "1"])
        .write_stdin("abcd")
        .assert()
        .success()
        .stdout("bcad");
}

#[test]
fn count_writes_json_profile_and_merges() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("text.txt");
    let profile = temp.path().join("freq.json");
    fs::write(&input, "Abba cab\n").unwrap();

    let count = || {
        cipher_tool()
            .args(["count_symbol_frequency", "--input_file", path_arg(&input)])
            .args(["--output_file", path_arg(&profile)])
            .assert()
            .success();
    };
    count();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&profile).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"A": 1, "a": 2, "b": 3, "c": 1}));

    count();
    cipher_tool()
        .args(["count_symbol_frequency", "--input_file", path_arg(&input)])
        .args(["--output_file", path_arg(&profile), "--merge"])
        .assert()
        .success();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&profile).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({"A": 2, "a": 4, "b": 6, "c": 2}));
}

#[test]
fn count_writes_table_format_to_stdout() {
    cipher_tool()
        .args(["count_symbol_frequency", "--format", "table"])
        .write_stdin("zzA")
        .assert()
        .success()
        .stdout("A - 1\nz - 2\n");
}

#[test]
fn caesar_breaking_recovers_plaintext() {
    let temp = tempdir().unwrap();
    let corpus = temp.path().join("corpus.txt");
    let profile = temp.path().join("english.json");
    let secret = temp.path().join("secret.txt");
    let recovered = temp.path().join("recovered.txt");
    fs::write(&corpus, CORPUS).unwrap();

    cipher_tool()
        .args(["--alphabet", "english-lower", "count_symbol_frequency"])
        .args(["--input_file", path_arg(&corpus), "--output_file", path_arg(&profile)])
        .assert()
        .success();

    cipher_tool()
        .args(["--alphabet", "english-lower", "encode", "--cipher", "caesar", "--key", "7"])
        .args(["--input_file", path_arg(&corpus), "--output_file", path_arg(&secret)])
        .assert()
        .success();

    cipher_tool()
        .args(["--alphabet", "english-lower", "caesar_breaking"])
        .args(["--file_with_symbols_frequency", path_arg(&profile)])
        .args(["--input_file", path_arg(&secret), "--output_file", path_arg(&recovered)])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&recovered).unwrap(), CORPUS);
}

#[test]
fn non_integer_caesar_key_fails() {
    cipher_tool()
        .args(["encode", "--cipher", "caesar", "--key", "three"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("integer shift"));
}

#[test]
fn vigenere_key_outside_alphabet_fails() {
    cipher_tool()
        .args(["--alphabet", "english-lower"])
        .args(["encode", "--cipher", "vigenere", "--key", "Key"])
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the alphabet"));
}

#[test]
fn missing_reference_profile_fails() {
    let temp = tempdir().unwrap();
    cipher_tool()
        .args(["caesar_breaking", "--file_with_symbols_frequency"])
        .arg(temp.path().join("absent.json"))
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load reference profile"));
}
