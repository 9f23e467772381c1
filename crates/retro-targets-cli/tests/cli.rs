use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_frames(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write frames");
    file
}

#[test]
fn classifies_a_low_target_frame() {
    // One frame: a 90x60 outer outline with its inner border.
    let frames = write_frames(
        r#"[[
            [[95, 120], [185, 120], [185, 180], [95, 180]],
            [[120, 135], [160, 135], [160, 165], [120, 165]]
        ]]"#,
    );

    Command::cargo_bin("retro-targets")
        .expect("binary")
        .args(["--no-report", "--polygons"])
        .arg(frames.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("frame 0: Distance=")
                .and(predicate::str::contains(":Angle="))
                .and(predicate::str::contains(":Tension=")),
        );
}

#[test]
fn empty_frame_reports_no_target() {
    let frames = write_frames("[[]]");

    Command::cargo_bin("retro-targets")
        .expect("binary")
        .args(["--no-report", "--polygons"])
        .arg(frames.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("frame 0: no target"));
}

#[test]
fn malformed_frames_fail_fast() {
    let frames = write_frames("{not json");

    Command::cargo_bin("retro-targets")
        .expect("binary")
        .args(["--no-report", "--polygons"])
        .arg(frames.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed polygon frames"));
}

#[test]
fn rejects_out_of_range_min_area() {
    Command::cargo_bin("retro-targets")
        .expect("binary")
        .args(["--no-report", "--min-area", "20000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid segmentation configuration"));
}
