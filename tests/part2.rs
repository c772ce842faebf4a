use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/example.txt").arg("7");

    cmd.assert().success().stdout(str::contains("exists is 6,1."));
}

#[test]
fn part2_linear_scan_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/example.txt").arg("7").arg("--linear");

    cmd.assert().success().stdout(str::contains("exists is 6,1."));
}

#[test]
fn part2_reports_when_map_never_breaks() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/example.txt").arg("9");

    cmd.assert()
        .success()
        .stderr(str::contains("There's no corrupted position can break the path"));
}

#[test]
fn part2_logs_finder_result() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs/example.txt").arg("7").arg("-v");

    cmd.assert()
        .success()
        .stdout(str::contains("exists is 6,1."))
        .stderr(str::contains("INFO: Finder stopped at threshold 20 of 25 position(s)."));
}
