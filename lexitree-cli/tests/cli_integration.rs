//! Integration tests for the lexitree CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn lexitree() -> Command {
    Command::cargo_bin("lexitree").unwrap()
}

#[test]
fn test_parse_english_text() {
    lexitree()
        .arg("parse")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    The quick brown fox jumps over the lazy dog. It costs 14 coins!",
        ))
        .stdout(predicate::str::contains("    Short one. The fox sleeps (quietly) now..."));
}

#[test]
fn test_parse_russian_text() {
    lexitree()
        .arg("parse")
        .arg("-i")
        .arg(fixture_path("russian-sample.txt"))
        .arg("-l")
        .arg("russian")
        .assert()
        .success()
        .stdout(predicate::str::contains("Мир тесен. Дом стоит 6 года!"))
        .stdout(predicate::str::contains("    Кот спит."));
}

#[test]
fn test_parse_from_stdin() {
    lexitree()
        .args(["parse", "-i", "-"])
        .write_stdin("\tWe   need 10/4 cups.")
        .assert()
        .success()
        .stdout("    We need 2.5 cups.\n");
}

#[test]
fn test_json_output() {
    let output = lexitree()
        .args(["parse", "-f", "json", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entry = &json[0];
    assert_eq!(entry["statistics"]["paragraphs"], 2);
    assert_eq!(entry["statistics"]["sentences"], 4);
    assert_eq!(entry["sentences"][1], "It costs 14 coins!");
    assert!(entry["diagnostics"]["gaps"].as_array().unwrap().is_empty());
}

#[test]
fn test_tree_output() {
    lexitree()
        .args(["parse", "-f", "tree", "-i", "-"])
        .write_stdin("\tIt is 2*3.")
        .assert()
        .success()
        .stdout(predicate::str::contains("document (1 paragraph)"))
        .stdout(predicate::str::contains("expression \"2*3\" = 6"));
}

#[test]
fn test_gaps_reported_on_stderr() {
    lexitree()
        .args(["parse", "-i", "-"])
        .write_stdin("\tKept here.\n\nnot indented.")
        .assert()
        .success()
        .stdout("    Kept here.\n")
        .stderr(predicate::str::contains("could not be parsed"));
}

#[test]
fn test_quiet_silences_gap_warnings() {
    lexitree()
        .args(["parse", "-q", "-i", "-"])
        .write_stdin("not indented.")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_strict_fails_on_gaps() {
    lexitree()
        .args(["parse", "--strict", "-i", "-"])
        .write_stdin("\tKept here.\n\nnot indented.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 span(s) could not be parsed"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    lexitree()
        .arg("parse")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("It costs 14 coins!"));
}

#[test]
fn test_glob_pattern() {
    // One language for every file, so only the English text parses cleanly
    lexitree()
        .args(["parse", "-q", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("It costs 14 coins!"));
}

#[test]
fn test_parallel_matches_sequential() {
    let text = vec!["\tOne two three. Four 1+1 five!"; 200].join("\n\n");

    let sequential = lexitree()
        .args(["parse", "--sequential", "-i", "-"])
        .write_stdin(text.clone())
        .output()
        .unwrap();
    let parallel = lexitree()
        .args(["parse", "--parallel", "-t", "2", "-i", "-"])
        .write_stdin(text)
        .output()
        .unwrap();

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_invalid_file() {
    lexitree()
        .args(["parse", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_analyze_text_report() {
    lexitree()
        .arg("analyze")
        .arg("-i")
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 paragraphs, 4 sentences, 19 words"))
        .stdout(predicate::str::contains(
            "Sentences with the longest word (7 characters):\n  The fox sleeps (quietly) now...",
        ))
        .stdout(predicate::str::contains(
            "Without sentences under 3 words: 3 sentences in 2 paragraphs",
        ))
        .stdout(predicate::str::contains("  the: 3"))
        .stdout(predicate::str::contains("  fox: 2"));
}

#[test]
fn test_analyze_json_min_words() {
    let output = lexitree()
        .args(["analyze", "-f", "json", "--min-words", "4", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &json[0]["report"];
    assert_eq!(report["min_words"], 4);
    assert_eq!(report["after_short_sentence_removal"]["sentences"], 2);
    assert_eq!(report["paragraphs_by_sentence_count"][0]["position"], 0);
    assert_eq!(report["longest_word_length"], 7);
}

#[test]
fn test_analyze_markdown_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.md");

    lexitree()
        .args(["analyze", "-f", "markdown", "-l", "russian", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("# Analysis of tests/fixtures/russian-sample.txt"));
    assert!(content.contains("Language `ru`"));
    assert!(content.contains("*Total sentences: 3*"));
}

#[test]
fn test_analyze_rejects_tree_format() {
    lexitree()
        .args(["analyze", "-f", "tree", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available for the parse command"));
}

#[test]
fn test_eval_command() {
    lexitree()
        .args(["eval", "(2 + 3) * 4"])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_division_by_zero() {
    lexitree()
        .args(["eval", "1/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Evaluation error"));
}

#[test]
fn test_external_language_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("loose.toml");

    lexitree()
        .args(["generate-config", "-l", "xx", "-o"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    lexitree()
        .args(["validate", "--language-config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Language code: xx"));

    lexitree()
        .args(["parse", "-i", "-", "--language-config"])
        .arg(&config_path)
        .write_stdin("\tCustom rules apply.")
        .assert()
        .success()
        .stdout("    Custom rules apply.\n");
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[metadata]\ncode = \"x\"\n").unwrap();

    lexitree()
        .args(["validate", "-c"])
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_help_command() {
    lexitree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("document tree"));
}

#[test]
fn test_list_languages() {
    lexitree()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en\tEnglish"))
        .stdout(predicate::str::contains("ru\tRussian"));
}

#[test]
fn test_list_formats() {
    lexitree()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tree"));
}
