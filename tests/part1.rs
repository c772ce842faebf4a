use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example.txt").arg("7").arg("12");

    cmd.assert().success().stdout(str::contains("22"));
}

#[test]
fn part1_reports_no_path_when_all_positions_fall() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example.txt").arg("7");

    cmd.assert()
        .success()
        .stderr(str::contains("There's no path"));
}

#[test]
fn part1_renders_map_with_path() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example.txt")
        .arg("7")
        .arg("12")
        .arg("--render");

    cmd.assert()
        .success()
        .stdout(str::contains("#").and(str::contains("O")));
}

#[test]
fn part1_rejects_positions_outside_of_map() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example.txt").arg("5");

    cmd.assert()
        .failure()
        .stderr(str::contains("outside of map"));
}

#[test]
fn part1_fails_on_missing_input() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/missing.txt").arg("7");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}

#[test]
fn part1_traces_search_statistics() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs/example.txt").arg("7").arg("12").arg("-vvv");

    cmd.assert()
        .success()
        .stdout(str::contains("22"))
        .stderr(
            str::contains("TRACE: Reached target at threshold 12")
                .and(str::contains("bucket(s)")),
        );
}
