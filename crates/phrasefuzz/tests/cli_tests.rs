//! End-to-end tests for the phrasefuzz binary

use std::process::{Command, Output};

fn phrasefuzz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_phrasefuzz"))
        .args(args)
        .env_remove("PHRASEFUZZ_TOLERANCE")
        .env_remove("PHRASEFUZZ_PARALLEL_THRESHOLD")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_match_exit_status() {
    let out = phrasefuzz(&["match", "caesar salad with grilled chicken", "chicken salad"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "true");

    let out = phrasefuzz(&["match", "burger", "cheeseburger"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "false");
}

#[test]
fn test_match_explain_and_negative_tolerance() {
    let out = phrasefuzz(&["match", "--explain", "item 1", "item 2"]);
    assert_eq!(stdout(&out), "digit_guard");

    let out = phrasefuzz(&["match", "--explain", "-t", "-1", "large fries", "fries"]);
    assert_eq!(stdout(&out), "exact_only");
}

#[test]
fn test_distance_and_stem() {
    assert_eq!(stdout(&phrasefuzz(&["distance", "kitten", "sitting"])), "3");
    assert_eq!(stdout(&phrasefuzz(&["stem", "running", "dogs"])), "run dog");
}

#[test]
fn test_text_helpers() {
    assert_eq!(
        stdout(&phrasefuzz(&["space-case", "SouthAfrican"])),
        "South African"
    );
    assert_eq!(
        stdout(&phrasefuzz(&["strip-html", "<b>Fish &amp; Chips</b>"])),
        "Fish & Chips"
    );
}

#[test]
fn test_search_catalog() {
    let path = std::env::temp_dir().join(format!("phrasefuzz-menu-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[{"id": "1", "name": "Cheese Burgers"}, {"id": "2", "name": "Pepperoni Pizza"}]"#,
    )
    .unwrap();

    let out = phrasefuzz(&["search", "--catalog", path.to_str().unwrap(), "cheeseburger"]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    let item: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(item["id"], "1");
}

#[test]
fn test_missing_catalog_is_an_error() {
    let out = phrasefuzz(&["search", "--catalog", "/nonexistent/menu.json", "fries"]);
    assert_eq!(out.status.code(), Some(2));
}
