//! On-disk file helpers shared by the JSON-backed stores.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Mode for state files any local user may read.
const SHARED_FILE_MODE: u32 = 0o644;

/// Mode for files holding secrets.
const SECRET_FILE_MODE: u32 = 0o600;

/// Write `contents` to `path` so readers never see a partially written file.
///
/// The bytes go to a uniquely named temp file in the same directory, which is
/// then renamed over `path`. Parent directories are created as needed. On any
/// failure the temp file is removed and `path` is left untouched.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    write_with_mode(path, contents, SHARED_FILE_MODE)
}

/// Like [`write_atomic`], but the file is owner-only (0600) from the moment
/// it is created, so the secret is never readable by other users.
pub fn write_secret(path: &Path, contents: &[u8]) -> io::Result<()> {
    write_with_mode(path, contents, SECRET_FILE_MODE)
}

/// Create `dir` and any missing parents as owner-only (0700) directories.
///
/// An existing `dir` is tightened to 0700 as well. No-op permissions on
/// non-Unix platforms.
pub fn create_private_dir(dir: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

        fs::DirBuilder::new()
            .recursive(true)
            .mode(0o700)
            .create(dir)?;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }
    #[cfg(not(unix))]
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// `mode` only applies on Unix.
fn write_with_mode(path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".rit-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(mode));
    }
    #[cfg(not(unix))]
    let _ = mode;

    // Dropping the temp file on an early return deletes it.
    let mut temp = builder.tempfile_in(parent)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/file.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert_eq!(entries(&temp_dir.path().join("nested/dir")), ["file.json"]);
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_atomic_failure_leaves_target() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in place of the target makes the rename fail.
        let path = temp_dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inside"), "keep").unwrap();

        assert!(write_atomic(&path, b"data").is_err());
        assert!(path.join("inside").exists());
        assert_eq!(entries(temp_dir.path()), ["taken"]);
    }

    #[test]
    fn test_concurrent_writers_do_not_collide() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("providers.json");

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let path = path.clone();
                thread::spawn(move || {
                    for _ in 0..20 {
                        write_atomic(&path, format!("writer {}", i).as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("writer "));
        assert_eq!(entries(temp_dir.path()), ["providers.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_secret_is_owner_only_on_creation() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("github");

        write_secret(&path, b"{\"token\":\"ghp_xxx\"}").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_state_files_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repositories.json");

        write_atomic(&path, b"[]").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_private_dir() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("home/credentials");

        create_private_dir(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn test_create_private_dir_tightens_existing() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("credentials");
        fs::create_dir(&dir).unwrap();
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

        create_private_dir(&dir).unwrap();

        let mode = fs::metadata(&dir).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
