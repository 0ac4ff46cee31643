//! End-to-end tests for the arbor binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = r#"{
  "graphs": [
    {
      "id": "http://example.org/fish.json",
      "nodes": [
        { "id": "ZFA:0001", "lbl": "anatomical structure", "type": "CLASS" },
        { "id": "ZFA:0002", "lbl": "fin", "type": "CLASS" },
        { "id": "ZFA:0003", "lbl": "eye", "type": "CLASS" },
        {
          "id": "ZFA:0004",
          "lbl": "lens",
          "type": "CLASS",
          "meta": { "synonyms": [{ "val": "crystalline lens" }] }
        }
      ],
      "edges": [
        { "sub": "ZFA:0002", "pred": "is_a", "obj": "ZFA:0001" },
        { "sub": "ZFA:0003", "pred": "is_a", "obj": "ZFA:0001" },
        { "sub": "ZFA:0004", "pred": "is_a", "obj": "ZFA:0002" },
        { "sub": "ZFA:0004", "pred": "is_a", "obj": "ZFA:0003" }
      ]
    }
  ]
}"#;

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");
    file
}

fn arbor() -> Command {
    Command::cargo_bin("arbor").expect("binary builds")
}

#[test]
fn roots_lists_the_single_root() {
    let file = sample_file();

    arbor()
        .arg("roots")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("anatomical structure (ZFA:0001)"));
}

#[test]
fn tree_with_no_sets_prints_only_the_root() {
    let file = sample_file();

    arbor()
        .arg("tree")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("anatomical structure"))
        .stdout(predicate::str::contains("fin").not());
}

#[test]
fn tree_expand_reveals_direct_children() {
    let file = sample_file();

    arbor()
        .arg("tree")
        .arg(file.path())
        .arg("--expand")
        .arg(r#"["ZFA:0001"]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("  eye (ZFA:0003)"))
        .stdout(predicate::str::contains("  fin (ZFA:0002)"))
        .stdout(predicate::str::contains("lens").not());
}

#[test]
fn paths_prints_one_line_per_route() {
    let file = sample_file();

    arbor()
        .arg("paths")
        .arg(file.path())
        .arg("ZFA:0004")
        .assert()
        .success()
        .stdout(predicate::str::contains("ZFA:0001 > ZFA:0002 > ZFA:0004"))
        .stdout(predicate::str::contains("ZFA:0001 > ZFA:0003 > ZFA:0004"));
}

#[test]
fn search_matches_synonyms() {
    let file = sample_file();

    arbor()
        .arg("search")
        .arg(file.path())
        .arg("crystalline")
        .assert()
        .success()
        .stdout(predicate::str::contains("lens (ZFA:0004)"));
}

#[test]
fn search_reveal_opens_every_route_to_the_hit() {
    let file = sample_file();

    arbor()
        .arg("search")
        .arg(file.path())
        .arg("lens")
        .arg("--reveal")
        .assert()
        .success()
        .stdout(predicate::str::contains("    lens (ZFA:0004)"));
}

#[test]
fn missing_file_fails_loudly() {
    arbor()
        .arg("roots")
        .arg("/no/such/file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
