// stickerize/src/storage/mod.rs
use crate::core::{Result, StickerError};
use crate::processors::{Compressor, Loader};
use image::DynamicImage;
use std::path::Path;
use walkdir::WalkDir;

/// Everything the pipeline needs from the filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait ImageStore {
    fn dir_exists(&self, dir: &Path) -> bool;

    /// Names of the regular files directly inside `dir`, in listing order.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;

    fn create_dir(&self, dir: &Path) -> std::io::Result<()>;

    fn read_image(&self, path: &Path) -> Result<DynamicImage>;

    /// Persists `image` as PNG, returning the encoded size in bytes.
    fn write_image(&self, image: &DynamicImage, path: &Path) -> Result<u64>;

    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Local filesystem backend.
pub struct FsStore {
    loader: Loader,
    compressor: Compressor,
}

impl FsStore {
    pub fn new(optimize_png: bool) -> Self {
        Self {
            loader: Loader::new(),
            compressor: Compressor::new().with_png_optimization(optimize_png),
        }
    }
}

impl Default for FsStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ImageStore for FsStore {
    fn dir_exists(&self, dir: &Path) -> bool {
        dir.exists()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Err(StickerError::InvalidParameter(format!(
                "Not a directory: {}",
                dir.display()
            )));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 && e.path().is_some() => {
                    // Broken links and unreadable entries are not regular files.
                    log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
                Err(e) => {
                    return Err(StickerError::Io(e.into_io_error().unwrap_or_else(|| {
                        std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                    })))
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_string()),
                None => log::warn!("Skipping non UTF-8 file name: {}", entry.path().display()),
            }
        }

        Ok(names)
    }

    fn create_dir(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir(dir)
    }

    fn read_image(&self, path: &Path) -> Result<DynamicImage> {
        self.loader.load(path)
    }

    fn write_image(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        self.compressor.save_png(image, path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path)?;
        Ok(())
    }
}

/// Lists the regular files of `dir`.
///
/// A missing directory is created (and reported empty) when `allow_create`
/// is set, otherwise the lookup fails with [`StickerError::NotFound`].
pub fn resolve_directory(store: &dyn ImageStore, dir: &Path, allow_create: bool) -> Result<Vec<String>> {
    if store.dir_exists(dir) {
        return store.list_files(dir);
    }

    if !allow_create {
        return Err(StickerError::NotFound(dir.to_path_buf()));
    }

    log::info!("dest directory does not exist, creating {}", dir.display());
    store
        .create_dir(dir)
        .map_err(|source| StickerError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_lists_only_regular_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.png"), b"x").unwrap();

        let mut names = resolve_directory(&FsStore::default(), dir.path(), false).unwrap();
        names.sort();

        assert_eq!(names, vec!["a.png".to_string(), "notes.txt".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("1.png"), b"x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.png"), dir.path().join("dangling.png"))
            .unwrap();

        let names = resolve_directory(&FsStore::default(), dir.path(), false).unwrap();
        assert_eq!(names, vec!["1.png".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_file_is_listed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("real.png"), b"x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.png"), dir.path().join("link.png"))
            .unwrap();

        let mut names = resolve_directory(&FsStore::default(), dir.path(), false).unwrap();
        names.sort();
        assert_eq!(names, vec!["link.png".to_string(), "real.png".to_string()]);
    }

    #[test]
    fn test_missing_directory_without_force() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("out");

        let err = resolve_directory(&FsStore::default(), &missing, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("No such file or directory: {}", missing.display())
        );
        assert!(!missing.exists());
    }

    #[test]
    fn test_missing_directory_is_created_with_force() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("out");

        let names = resolve_directory(&FsStore::default(), &missing, true).unwrap();
        assert!(names.is_empty());
        assert!(missing.is_dir());
    }

    #[test]
    fn test_creation_failure_is_create_error() {
        let mut store = MockImageStore::new();
        store.expect_dir_exists().return_const(false);
        store.expect_create_dir().returning(|_| {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
        });

        let err = resolve_directory(&store, &PathBuf::from("/locked/out"), true).unwrap_err();
        assert!(matches!(err, StickerError::CreateDir { .. }));
        assert!(err.is_setup_failure());
    }

    #[test]
    fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.png");
        std::fs::write(&path, b"x").unwrap();

        FsStore::default().remove_file(&path).unwrap();
        assert!(!path.exists());
    }
}
