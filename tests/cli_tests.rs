use assert_cmd::prelude::{CommandCargoExt, OutputAssertExt};
use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::*;
use std::process::Command;

fn write_pair(
    dir: &assert_fs::TempDir,
    old_content: &str,
    new_content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    dir.child("old.txt").write_str(old_content)?;
    dir.child("new.txt").write_str(new_content)?;
    Ok(())
}

#[test]
fn diff_marks_single_line_change_as_modify() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    write_pair(&dir, "a\nb\nc", "a\nX\nc")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("new.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- old.txt"))
        .stdout(predicate::str::contains("+++ new.txt"))
        .stdout(predicate::str::contains(" a\n"))
        .stdout(predicate::str::contains("~b => X\n"))
        .stdout(predicate::str::contains(" c\n"));

    Ok(())
}

#[test]
fn diff_keeps_unequal_blocks_as_separate_records() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    write_pair(&dir, "a\nb", "a\nx\ny")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("new.txt")
        .arg("--no-pager");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-b\n"))
        .stdout(predicate::str::contains("+x\n"))
        .stdout(predicate::str::contains("+y\n"))
        .stdout(predicate::str::contains("~").not());

    Ok(())
}

#[test]
fn diff_of_identical_files_prints_whole_text_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let content = Words(3..6).fake::<Vec<String>>().join("\n");
    write_pair(&dir, &content, &content)?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("new.txt");

    // The identical-input fast path emits one record holding the entire
    // text, so the whole content shows up behind a single leading space.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!(" {content}\n")));

    Ok(())
}

#[test]
fn diff_emits_typed_json_records() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    write_pair(&dir, "a\nb\nc", "a\nX\nc")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("new.txt")
        .arg("--json");

    let output = cmd.assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let records: serde_json::Value = serde_json::from_str(&stdout)?;

    let records = records.as_array().expect("an array of change records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["type"], "equal");
    assert_eq!(records[1]["type"], "modify");
    assert_eq!(records[1]["old_value"], "b");
    assert_eq!(records[1]["new_value"], "X");
    assert_eq!(records[2]["type"], "equal");

    Ok(())
}

#[test]
fn lines_engine_produces_the_same_single_line_modify() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    write_pair(&dir, "a\nb\nc", "a\nX\nc")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("new.txt")
        .arg("--engine")
        .arg("lines");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("~b => X\n"));

    Ok(())
}

#[test]
fn distance_prints_the_minimal_edit_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    write_pair(&dir, "a\nb\nc", "a\nX\nc")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("distance")
        .arg("old.txt")
        .arg("new.txt");

    cmd.assert().success().stdout("2\n");

    Ok(())
}

#[test]
fn missing_input_file_is_reported_before_any_diff() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("old.txt").write_str("a\n")?;
    let mut cmd = Command::cargo_bin("rift")?;

    cmd.current_dir(dir.path())
        .arg("diff")
        .arg("old.txt")
        .arg("missing.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    Ok(())
}
