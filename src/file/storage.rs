//! Physical file storage for ProjectHub.
//!
//! Stored paths are relative strings such as `downloads/Acme/data.csv`
//! and are resolved against the storage root:
//! ```text
//! {root}/
//! └── downloads/
//!     ├── Acme_Inc/
//!     │   └── data.csv
//!     └── My_Project/
//!         └── report_1.pdf
//! ```

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::{HubError, Result};

/// File storage service for managing physical files.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory that relative paths are resolved against.
    root: PathBuf,
}

impl FileStorage {
    /// Create a new FileStorage rooted at the given directory.
    ///
    /// The root directory will be created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Get the root directory of this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write content to the given relative path.
    ///
    /// Parent directories are created as needed and an existing file is
    /// overwritten.
    pub fn save(&self, path: &str, content: &[u8]) -> Result<()> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;

        Ok(())
    }

    /// Read the content stored at the given relative path.
    pub fn load(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path)?;

        match fs::read(&full_path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(HubError::FileMissing(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the file at the given relative path.
    ///
    /// Returns [`HubError::FileMissing`] if there is no such file.
    pub fn delete(&self, path: &str) -> Result<()> {
        let full_path = self.resolve(path)?;

        match fs::remove_file(&full_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(HubError::FileMissing(path.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a file exists at the given relative path.
    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Resolve a relative storage path to a full path under the root.
    ///
    /// Only normal components are accepted; `..`, absolute paths and drive
    /// prefixes are rejected.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        if path.is_empty() {
            return Err(HubError::Validation("storage path is empty".to_string()));
        }
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(HubError::Validation(format!(
                        "storage path escapes the storage root: {path}"
                    )));
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStorage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_new_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("nested").join("storage");

        assert!(!root.exists());
        let storage = FileStorage::new(&root).unwrap();
        assert!(root.exists());
        assert_eq!(storage.root(), root);
    }

    #[test]
    fn test_save_creates_parents_and_load() {
        let (temp_dir, storage) = setup();

        storage.save("downloads/Acme/data.csv", b"a,b\n1,2\n").unwrap();

        assert!(temp_dir.path().join("downloads/Acme/data.csv").exists());
        assert_eq!(storage.load("downloads/Acme/data.csv").unwrap(), b"a,b\n1,2\n");
    }

    #[test]
    fn test_save_overwrites() {
        let (_temp_dir, storage) = setup();

        storage.save("downloads/P/x.pdf", b"first").unwrap();
        storage.save("downloads/P/x.pdf", b"second").unwrap();

        assert_eq!(storage.load("downloads/P/x.pdf").unwrap(), b"second");
    }

    #[test]
    fn test_save_empty_content() {
        let (_temp_dir, storage) = setup();

        storage.save("downloads/P/empty.csv", b"").unwrap();
        assert!(storage.exists("downloads/P/empty.csv"));
        assert!(storage.load("downloads/P/empty.csv").unwrap().is_empty());
    }

    #[test]
    fn test_delete_twice() {
        let (_temp_dir, storage) = setup();
        storage.save("downloads/P/x.pdf", b"data").unwrap();

        assert!(storage.delete("downloads/P/x.pdf").is_ok());
        assert!(!storage.exists("downloads/P/x.pdf"));

        let result = storage.delete("downloads/P/x.pdf");
        assert!(matches!(result, Err(HubError::FileMissing(p)) if p == "downloads/P/x.pdf"));
    }

    #[test]
    fn test_load_missing() {
        let (_temp_dir, storage) = setup();
        let result = storage.load("downloads/P/none.pdf");
        assert!(matches!(result, Err(HubError::FileMissing(_))));
    }

    #[test]
    fn test_exists() {
        let (_temp_dir, storage) = setup();

        assert!(!storage.exists("downloads/P/x.pdf"));
        storage.save("downloads/P/x.pdf", b"x").unwrap();
        assert!(storage.exists("downloads/P/x.pdf"));
        // Directories are not files
        assert!(!storage.exists("downloads/P"));
    }

    #[test]
    fn test_resolve_rejects_escapes() {
        let (_temp_dir, storage) = setup();

        assert!(matches!(
            storage.resolve("../outside.pdf"),
            Err(HubError::Validation(_))
        ));
        assert!(matches!(
            storage.resolve("downloads/../../x.pdf"),
            Err(HubError::Validation(_))
        ));
        assert!(matches!(
            storage.resolve("/etc/passwd"),
            Err(HubError::Validation(_))
        ));
        assert!(matches!(storage.resolve(""), Err(HubError::Validation(_))));
        assert!(storage.save("../x.pdf", b"x").is_err());
        assert!(!storage.exists("../x.pdf"));
    }

    #[test]
    fn test_resolve_joins_root() {
        let (temp_dir, storage) = setup();
        let path = storage.resolve("downloads/P/x.pdf").unwrap();
        assert_eq!(path, temp_dir.path().join("downloads/P/x.pdf"));
    }
}
