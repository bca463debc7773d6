#![forbid(unsafe_code)]
use assert_cmd::Command;
use escala::{JsonStorage, Role, Storage};
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(roster: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("escala-cli").unwrap();
    cmd.arg("--roster").arg(roster);
    cmd
}

#[test]
fn reset_then_generate_month() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");

    cli(&path).arg("reset").assert().success();
    cli(&path)
        .args(["generate", "--month", "2024-02", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-03 Sáb |"))
        .stdout(predicate::str::contains("2024-02-28 Qua |"))
        .stdout(predicate::str::contains("2024-02-29").not());
}

#[test]
fn generate_refuses_small_team() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");

    cli(&path)
        .args(["add-member", "--name", "Ana", "--role", "leader"])
        .assert()
        .success();
    cli(&path)
        .args(["generate", "--month", "2024-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough members"));
}

#[test]
fn conflicts_exit_with_warning_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");

    cli(&path)
        .args(["add-member", "--name", "Ana", "--role", "leader"])
        .assert()
        .success();
    cli(&path)
        .args(["toggle-day", "--name", "Ana", "--weekday", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable"));
    cli(&path)
        .args([
            "generate",
            "--month",
            "2024-02",
            "--min-leaders",
            "1",
            "--min-participants",
            "0",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("2024-02-07 Qua | Ana | ! Líder: Ocupado"));
}

#[test]
fn member_edits_are_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");

    cli(&path)
        .args(["add-member", "--name", "Rui", "--role", "participant"])
        .assert()
        .success();
    cli(&path)
        .args([
            "add-date", "--name", "Rui", "--date", "2024-02-10", "--reason", "Viagem",
        ])
        .assert()
        .success();

    let roster = JsonStorage::open(&path).unwrap().load().unwrap();
    let rui = roster.find_person_by_name("Rui").unwrap();
    assert_eq!(rui.role, Role::Participant);
    assert_eq!(rui.unavailable_dates[0].reason, "Viagem");

    cli(&path)
        .args(["remove-member", "--name", "Rui"])
        .assert()
        .success();
    cli(&path)
        .args(["remove-member", "--name", "Rui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown member"));
}

#[test]
fn rejects_malformed_month() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    cli(&path).arg("reset").assert().success();
    cli(&path)
        .args(["generate", "--month", "2024-13"])
        .assert()
        .failure();
}

#[test]
fn import_refuses_existing_member_names() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let csv = dir.path().join("members.csv");

    cli(&path)
        .args(["add-member", "--name", "Ana", "--role", "leader"])
        .assert()
        .success();

    std::fs::write(&csv, "name,role\nAna,leader\n").unwrap();
    cli(&path)
        .arg("import-members")
        .arg("--csv")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("member already exists: Ana"));

    std::fs::write(&csv, "name,role\nBia,leader\nRui,auxiliar\n").unwrap();
    cli(&path)
        .arg("import-members")
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 member(s) imported"));

    let roster = JsonStorage::open(&path).unwrap().load().unwrap();
    assert_eq!(roster.people.len(), 3);
    assert_eq!(
        roster.people.iter().filter(|p| p.name == "Ana").count(),
        1
    );
    assert!(roster.find_person_by_name("Bia").unwrap().color.is_some());
}
