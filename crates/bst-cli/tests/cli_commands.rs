//! Integration tests for the bst CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GOBLIN: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/goblin.json");
const PAGE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/page.json");

fn bst() -> Command {
    let mut cmd = Command::cargo_bin("bst").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// --- xp ---

#[test]
fn xp_for_known_rating() {
    bst()
        .args(["xp", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1800 XP"));
}

#[test]
fn xp_for_fractional_rating() {
    bst()
        .args(["xp", "1/8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 XP"));
}

#[test]
fn xp_for_unknown_rating_fails() {
    bst()
        .args(["xp", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown challenge rating"));
}

// --- render ---

#[test]
fn render_single_record() {
    bst()
        .args(["render", GOBLIN])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# $\\[objectname]\n"))
        .stdout(predicate::str::contains("**Challenge** 1/4 (50 XP)"))
        .stdout(predicate::str::contains("**Scimitar.**"));
}

#[test]
fn render_named_title() {
    bst()
        .args(["render", GOBLIN, "--named"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Goblin\n"));
}

#[test]
fn render_without_style() {
    bst()
        .args(["render", GOBLIN, "--no-style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<style>").not())
        .stdout(predicate::str::contains("|STR|DEX|CON|INT|WIS|CHA|"));
}

#[test]
fn render_page_with_pick() {
    bst()
        .args(["render", PAGE, "--pick", "knight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Reactions"))
        .stdout(predicate::str::contains("**Parry.**"));
}

#[test]
fn render_page_prompts_for_choice() {
    bst()
        .args(["render", PAGE])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Goblin"))
        .stdout(predicate::str::contains("**Challenge** 3 (700 XP)"));
}

#[test]
fn render_page_prompt_closed_fails() {
    bst()
        .args(["render", PAGE])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn render_page_list() {
    bst()
        .args(["render", PAGE, "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblin"))
        .stdout(predicate::str::contains("Knight"))
        .stdout(predicate::str::contains("2 monsters"));
}

#[test]
fn render_to_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("goblin.md");

    bst()
        .args(["render", GOBLIN, "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote Goblin"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("**Armor Class** 15 (leather armor, shield)"));
    assert!(written.ends_with('\n'));
}

#[test]
fn render_unknown_challenge_rating_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.json");
    let json = fs::read_to_string(GOBLIN)
        .unwrap()
        .replace("\"1/4\"", "\"99\"");
    fs::write(&path, json).unwrap();

    bst()
        .args(["render", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown challenge rating"));
}

#[test]
fn render_bad_pick_fails() {
    bst()
        .args(["render", PAGE, "--pick", "Lich"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no monster named \"Lich\""));
}

#[test]
fn render_missing_file_fails() {
    bst()
        .args(["render", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn render_malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    bst()
        .args(["render", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}

// --- logging ---

#[test]
fn quiet_by_default() {
    bst()
        .args(["render", GOBLIN])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn rust_log_is_respected() {
    bst()
        .env("RUST_LOG", "debug")
        .args(["render", GOBLIN])
        .assert()
        .success()
        .stderr(predicate::str::contains("rendered statblock"));
}

#[test]
fn verbose_flag_enables_debug() {
    bst()
        .args(["-v", "render", GOBLIN])
        .assert()
        .success()
        .stderr(predicate::str::contains("rendered statblock"));
}

// --- search against a saved file ---

#[test]
fn search_by_challenge_rating() {
    bst()
        .args(["--from", PAGE, "cr", "1/4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Challenge** 1/4 (50 XP)"));
}

#[test]
fn search_by_name() {
    bst()
        .args(["--from", PAGE, "name", "KNI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Parry.**"));
}

#[test]
fn search_by_type_list() {
    bst()
        .args(["--from", PAGE, "type", "humanoid", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Goblin"))
        .stdout(predicate::str::contains("Knight"));
}

#[test]
fn search_without_matches() {
    bst()
        .args(["--from", PAGE, "name", "lich"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No monsters found for name \"lich\""));
}

#[test]
fn search_unknown_type_fails() {
    bst()
        .args(["--from", PAGE, "type", "kobold"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown monster type"));
}

// --- menu ---

#[test]
fn menu_by_name() {
    bst()
        .args(["--from", PAGE])
        .write_stdin("1\nknight\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Parry.**"));
}

#[test]
fn menu_by_type() {
    bst()
        .args(["--from", PAGE, "menu", "--named"])
        .write_stdin("3\n10\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Goblin"));
}
