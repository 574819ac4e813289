use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn wordkit() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wordkit"));
    cmd.env_remove("WORDKIT_FORMAT")
        .env_remove("WORDKIT_WORDS_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn words_of(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|v| v.get("word").and_then(|w| w.as_str()).unwrap().to_string())
        .collect()
}

#[test]
fn anagram_reports_matches_in_list_order() {
    let assert = wordkit()
        .args(["anagram", "listen", "--words", "enlist,google,inlets,banana"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(words_of(&items), vec!["enlist", "inlets"]);
    for item in &items {
        assert_eq!(item["kind"], "match");
        assert_eq!(item["source_mode"], "anagram");
        assert_eq!(item["pattern"], "listen");
        assert_eq!(item["meta"]["list"], "inline");
    }
    assert_eq!(items[0]["meta"]["index"], 0);
    assert_eq!(items[1]["meta"]["index"], 2);
}

#[test]
fn anagram_raw_format_prints_bare_words() {
    wordkit()
        .args(["anagram", "ab", "--words", "a,ab,ba,abc", "--format", "raw"])
        .assert()
        .success()
        .stdout("ab\nba\n");
}

#[test]
fn anagram_reads_word_file() {
    let assert = wordkit()
        .args(["anagram", "listen", "--words-file", "tests/fixtures/words.txt"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(
        words_of(&items),
        vec!["enlist", "inlets", "silent", "listen"]
    );
    assert_eq!(items[0]["meta"]["list"], "words.txt");
}

#[test]
fn anagram_reads_word_file_from_env() {
    let assert = wordkit()
        .env("WORDKIT_WORDS_FILE", "tests/fixtures/words.txt")
        .args(["anagram", "god"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(words_of(&items), vec!["dog"]);
}

#[test]
fn anagram_with_remote_list_finds_nothing_and_warns() {
    wordkit()
        .args(["anagram", "cat"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("not fetched"));
}

#[test]
fn quiet_suppresses_warnings() {
    wordkit()
        .args(["anagram", "cat", "--list", "english", "--quiet"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn anagram_missing_file_degrades_to_no_matches() {
    let temp = tempdir().unwrap();
    wordkit()
        .arg("anagram")
        .arg("cat")
        .arg("--words-file")
        .arg(temp.path().join("missing.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("failed to read word list"));
}

#[test]
fn anagram_rejects_empty_pattern() {
    wordkit()
        .args(["anagram", "", "--words", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pattern must not be empty"));
}

#[test]
fn anagram_unknown_list_is_an_error() {
    wordkit()
        .args(["anagram", "cat", "--list", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown word list: klingon"));
}

#[test]
fn anagram_progress_goes_to_stderr() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("many.txt");
    let words: Vec<String> = (0..300).map(|i| format!("word{i}")).collect();
    fs::write(&path, words.join("\n")).unwrap();

    let assert = wordkit()
        .arg("anagram")
        .arg("zz")
        .arg("--words-file")
        .arg(&path)
        .arg("--progress")
        .arg("--no-color")
        .assert()
        .success()
        .stdout("");

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("scanning"));
    assert!(stderr.contains("1%"));
    assert!(stderr.contains("99%"));
    assert!(!stderr.contains("100%"));
}

#[test]
fn anagram_progress_is_silent_when_quiet() {
    wordkit()
        .args(["anagram", "ab", "--words", "a,ab,ba,abc", "--progress", "-q"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn check_reports_anagram_flag() {
    let assert = wordkit()
        .args(["check", "listen", "silent"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "check");
    assert_eq!(items[0]["data"]["anagram"], true);

    let assert = wordkit()
        .args(["check", "listen", "google"])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["data"]["anagram"], false);
}

#[test]
fn check_rejects_empty_pattern() {
    wordkit()
        .args(["check", "", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pattern must not be empty"));
}

#[test]
fn check_raw_format_prints_verdict() {
    wordkit()
        .args(["check", "listen", "google", "--format", "raw"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn lists_raw_format_prints_names() {
    wordkit()
        .args(["lists", "--format", "raw"])
        .assert()
        .success()
        .stdout("English\n");
}

#[test]
fn check_markdown_output() {
    wordkit()
        .args(["--format", "md", "check", "ab", "ba"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Checks"))
        .stdout(predicate::str::contains("`ab` / `ba`: anagram"));
}

#[test]
fn format_from_env() {
    wordkit()
        .env("WORDKIT_FORMAT", "raw")
        .args(["anagram", "ab", "--words", "ba"])
        .assert()
        .success()
        .stdout("ba\n");
}

#[test]
fn json_format_is_one_array() {
    let assert = wordkit()
        .args(["anagram", "ab", "--words", "ab,ba", "--format", "json"])
        .assert()
        .success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn wordsearch_finds_fixture_words() {
    let assert = wordkit()
        .args([
            "wordsearch",
            "tests/fixtures/grid.txt",
            "--words-file",
            "tests/fixtures/words.txt",
        ])
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let summary: Vec<(String, u64, u64, String)> = items
        .iter()
        .map(|v| {
            let p = &v["placement"];
            (
                v["word"].as_str().unwrap().to_string(),
                p["row"].as_u64().unwrap(),
                p["col"].as_u64().unwrap(),
                p["direction"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("cat".to_string(), 0, 0, "e".to_string()),
            ("dog".to_string(), 0, 3, "s".to_string()),
            ("owl".to_string(), 2, 0, "e".to_string()),
            ("bird".to_string(), 3, 0, "e".to_string()),
        ]
    );
    assert!(items.iter().all(|v| v["source_mode"] == "wordsearch"));
}

#[test]
fn wordsearch_min_len_filters() {
    let assert = wordkit()
        .args([
            "wordsearch",
            "tests/fixtures/grid.txt",
            "--words-file",
            "tests/fixtures/words.txt",
            "--min-len",
            "4",
            "--format",
            "raw",
        ])
        .assert()
        .success();
    assert_eq!(String::from_utf8_lossy(&assert.get_output().stdout), "bird\n");
}

#[test]
fn wordsearch_rejects_ragged_grid() {
    let temp = tempdir().unwrap();
    let grid = temp.path().join("grid.txt");
    fs::write(&grid, "abc\nab\n").unwrap();

    wordkit()
        .arg("wordsearch")
        .arg(&grid)
        .args(["--words", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rows must all be the same width"));
}

#[test]
fn wordsearch_rejects_min_len_below_two() {
    wordkit()
        .args(["wordsearch", "tests/fixtures/grid.txt", "--min-len", "1"])
        .assert()
        .failure();
}

#[test]
fn lists_shows_builtin_lists() {
    let assert = wordkit().arg("lists").assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "list");
    assert_eq!(items[0]["data"]["name"], "English");
    assert_eq!(items[0]["data"]["source"]["type"], "remote");
}
