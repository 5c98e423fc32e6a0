use std::fs;
use tempfile::tempdir;

use fskit::{ErrorKind, FileOps, FsKitError};

#[test]
fn read_missing_path_fails_with_not_found() {
    let td = tempdir().unwrap();
    let err = FileOps::new().read(td.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("nope.txt"), "msg was: {}", err);
}

#[test]
fn create_then_read_round_trips_text() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let files = FileOps::new();
    let path = td.path().join("notes.md");
    let content = "héllo\nwörld — ✓\n";

    files.create(&path, content)?;
    let read = files.read(&path)?;
    assert_eq!(read.content, content);
    assert_eq!(read.name, "notes");
    assert_eq!(read.extension, ".md");
    assert_eq!(read.name_with_extension, "notes.md");
    Ok(())
}

#[test]
fn update_overwrites_and_does_not_require_existing_file() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let files = FileOps::new();
    let path = td.path().join("a.txt");

    files.update(&path, "first")?;
    files.update(&path, "second")?;
    assert_eq!(fs::read_to_string(&path)?, "second");
    Ok(())
}

#[test]
fn create_fails_when_parent_missing() {
    let td = tempdir().unwrap();
    let err = FileOps::new()
        .create(td.path().join("missing").join("a.txt"), "x")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_removes_files_but_not_directories() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let files = FileOps::new();
    let path = td.path().join("gone.txt");
    fs::write(&path, "x")?;

    files.delete(&path)?;
    assert!(!path.exists());
    assert_eq!(files.delete(&path).unwrap_err().kind(), ErrorKind::NotFound);

    let dir = td.path().join("d");
    fs::create_dir(&dir)?;
    assert!(files.delete(&dir).is_err());
    assert!(dir.is_dir());
    Ok(())
}

#[test]
fn rename_moves_files_and_rejects_directories() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let files = FileOps::new();
    let old = td.path().join("old.txt");
    let new = td.path().join("new.txt");
    fs::write(&old, "payload")?;

    files.rename(&old, &new)?;
    assert!(!old.exists());
    assert_eq!(fs::read_to_string(&new)?, "payload");

    // missing source surfaces the OS error
    let err = files.rename(&old, td.path().join("other.txt")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let dir = td.path().join("folder");
    fs::create_dir(&dir)?;
    let err = files.rename(&dir, td.path().join("folder2")).unwrap_err();
    assert!(matches!(err, FsKitError::IsADirectory(_)));
    Ok(())
}

#[test]
fn copy_reports_errors_instead_of_false() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let files = FileOps::new();
    let src = td.path().join("src.txt");
    let dst = td.path().join("dst.txt");

    let err = files.copy(&src, &dst).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!dst.exists());

    fs::write(&src, "copy me")?;
    files.copy(&src, &dst)?;
    assert_eq!(fs::read_to_string(&dst)?, "copy me");
    assert!(src.exists());
    Ok(())
}
