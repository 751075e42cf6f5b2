//! Output directory preparation.

use std::io;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Creates `path` (and its parents) unless it is already a directory.
///
/// New directories get mode `0755` on unix.
pub async fn ensure_directory(path: &Path) -> io::Result<()> {
    if fs::metadata(path).await.map(|m| m.is_dir()).unwrap_or(false) {
        return Ok(());
    }

    debug!("Creating output directory {:?}", path);
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("PDFs");
        ensure_directory(&target).await.unwrap();
        assert!(target.is_dir());
        // Second call is a no-op.
        ensure_directory(&target).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ZIPs");
        ensure_directory(&target).await.unwrap();
        let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        // The process umask can only remove bits.
        assert_eq!(mode & !0o755, 0);
    }

    #[tokio::test]
    async fn test_file_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("PDFs");
        std::fs::write(&target, b"").unwrap();
        assert!(ensure_directory(&target).await.is_err());
    }
}
