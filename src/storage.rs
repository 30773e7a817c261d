//! Image storage - stored pest images on local disk
//!
//! Given uploaded bytes, returns a stable path recorded verbatim on the
//! pest report. Serving the stored file back is out of scope here.

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

/// Accepted image extensions
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Extension whitelist check on the client-supplied filename
    pub fn allowed_file(filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Write bytes under a unique filename; returns the stored path.
    pub fn save(&self, bytes: &[u8], filename: &str) -> std::io::Result<String> {
        let unique = format!("{}_{}", Uuid::new_v4().simple(), sanitize(filename));
        let path = self.root.join(unique);
        fs::write(&path, bytes)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Best-effort removal of a stored image
    pub fn remove(&self, stored_path: &str) -> std::io::Result<()> {
        fs::remove_file(stored_path)
    }
}

/// Strip directories and anything outside [A-Za-z0-9._-]
fn sanitize(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let safe: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();

    if safe.trim_matches(['.', '_']).is_empty() {
        "upload".to_string()
    } else {
        safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_allowed_file() {
        assert!(ImageStore::allowed_file("leaf.jpg"));
        assert!(ImageStore::allowed_file("leaf.spot.PNG"));
        assert!(!ImageStore::allowed_file("leaf.bmp"));
        assert!(!ImageStore::allowed_file("noextension"));
    }

    #[test]
    fn test_save_and_remove() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        let path = store.save(b"fake image bytes", "leaf.jpg").unwrap();
        assert!(path.ends_with("_leaf.jpg"));
        assert_eq!(fs::read(&path).unwrap(), b"fake image bytes");

        store.remove(&path).unwrap();
        assert!(fs::metadata(&path).is_err());
    }

    #[test]
    fn test_unique_filenames() {
        let dir = tempdir().unwrap();
        let store = ImageStore::new(dir.path()).unwrap();

        let a = store.save(b"one", "leaf.jpg").unwrap();
        let b = store.save(b"two", "leaf.jpg").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize("C:\\photos\\leaf spot.jpg"), "leaf_spot.jpg");
        assert_eq!(sanitize("...."), "upload");
    }
}
