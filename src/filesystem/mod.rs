//! File system operations for the shell
//!
//! Thin wrappers over the host file system. Each call opens, uses and closes
//! its handles within the call; host failures come back as
//! `ShellError::Host` tagged with the command name.

use crate::error::{Result, ShellError};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::debug;

/// Create a single directory
pub fn make_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir(path).map_err(|e| ShellError::host("mkdir", e))?;
    debug!(path = %path.display(), "directory created");
    Ok(())
}

/// Replace the file's contents with `text` followed by a newline
pub fn write_file(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| ShellError::host("write", e))?;
    writeln!(file, "{}", text).map_err(|e| ShellError::host("write", e))?;
    file.flush().map_err(|e| ShellError::host("write", e))?;
    debug!(path = %path.display(), bytes = text.len() + 1, "file written");
    Ok(())
}

/// Read a file as lines, terminators removed.
///
/// Bytes that are not UTF-8 are replaced rather than failing the read.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let file = File::open(path.as_ref()).map_err(|e| ShellError::host("read", e))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ShellError::host("read", e))?;
        if read == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        lines.push(String::from_utf8_lossy(line).into_owned());
    }
    Ok(lines)
}

/// Entry names of a directory: `.` and `..` first, then the rest by name
pub fn list_directory(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(path.as_ref()).map_err(|e| ShellError::host("list", e))? {
        let entry = entry.map_err(|e| ShellError::host("list", e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut entries = Vec::with_capacity(names.len() + 2);
    entries.push(".".to_string());
    entries.push("..".to_string());
    entries.extend(names);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");

        write_file(&file, "hello").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "hello\n");
        assert_eq!(read_file(&file).unwrap(), vec!["hello"]);

        // Writing again truncates
        write_file(&file, "bye").unwrap();
        assert_eq!(read_file(&file).unwrap(), vec!["bye"]);
    }

    #[test]
    fn test_read_multiline_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("multi.txt");
        fs::write(&file, "one\ntwo\nthree").unwrap();

        assert_eq!(read_file(&file).unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_read_keeps_lines_that_are_not_utf8() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("bytes.bin");
        fs::write(&file, b"ok\n\xff\xfe\r\nlast").unwrap();

        assert_eq!(read_file(&file).unwrap(), vec!["ok", "\u{FFFD}\u{FFFD}", "last"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_file(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ShellError::Host { op: "read", .. }));
        assert!(err.to_string().starts_with("read: "));
    }

    #[test]
    fn test_mkdir_twice_fails() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");

        make_directory(&sub).unwrap();
        assert!(sub.is_dir());

        let err = make_directory(&sub).unwrap_err();
        match err {
            ShellError::Host { op, ref source } => {
                assert_eq!(op, "mkdir");
                assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_list_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("c")).unwrap();

        assert_eq!(
            list_directory(dir.path()).unwrap(),
            vec![".", "..", "a.txt", "b.txt", "c"]
        );
    }

    #[test]
    fn test_list_missing_directory() {
        let dir = tempdir().unwrap();
        let err = list_directory(dir.path().join("nowhere")).unwrap_err();
        assert!(err.to_string().starts_with("list: "));
    }
}
