use std::fs;

use story_engine::AtomicFileWriter;
use tempfile::TempDir;

#[test]
fn first_write_creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());

    let written = AtomicFileWriter::new(new_dir.clone())
        .write("prefs.ron", "{}")
        .unwrap();

    assert!(new_dir.is_dir());
    assert_eq!(written, new_dir.join("prefs.ron"));
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("prefs.ron", "{\"search\":\"React\"}").unwrap();
    assert_eq!(first.file_name().unwrap(), "prefs.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "{\"search\":\"React\"}");

    let second = writer.write("prefs.ron", "{\"search\":\"Redux\"}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "{\"search\":\"Redux\"}");
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("prefs.ron", "data").is_err());
    assert!(!file_path.with_file_name("prefs.ron").exists());
}
