use std::fs::{self, File, FileTimes};
use std::path::Path;

use tracing::debug;

/// Copies `from` to `to` with its permissions and access/modification times,
/// creating missing parent directories of `to`. Returns the bytes copied.
pub fn copy_with_metadata(from: &Path, to: &Path) -> std::io::Result<u64> {
    if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(from, to)?;

    let meta = fs::metadata(from)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    // `fs::copy` already applied the source permissions, which may be read-only;
    // setting times only needs ownership, not write access
    File::open(to)?.set_times(times)?;

    debug!("Copied {} bytes: {:?} -> {:?}", bytes, from, to);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn copies_content_and_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("temp_output_1.jpg");
        fs::write(&from, b"swapped pixels").unwrap();

        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&from)
            .unwrap()
            .set_modified(stamp)
            .unwrap();

        let to = dir.path().join("result.jpg");
        let bytes = copy_with_metadata(&from, &to).unwrap();

        assert_eq!(bytes, 14);
        assert_eq!(fs::read(&to).unwrap(), b"swapped pixels");
        assert_eq!(fs::metadata(&to).unwrap().modified().unwrap(), stamp);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_intermediate_is_copied() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("temp_output_0.jpg");
        fs::write(&from, b"locked").unwrap();
        let stamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        File::open(&from).unwrap().set_modified(stamp).unwrap();
        fs::set_permissions(&from, fs::Permissions::from_mode(0o444)).unwrap();

        let to = dir.path().join("result.jpg");
        copy_with_metadata(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), b"locked");
        let meta = fs::metadata(&to).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o444);
        assert_eq!(meta.modified().unwrap(), stamp);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("in.png");
        fs::write(&from, b"x").unwrap();

        let to = dir.path().join("nested/out/final.png");
        copy_with_metadata(&from, &to).unwrap();
        assert!(to.is_file());
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_with_metadata(&dir.path().join("gone.png"), &dir.path().join("out.png"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
