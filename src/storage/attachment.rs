//! Out-of-band storage for ticket attachments

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Contract for durable attachment storage
///
/// `save` must generate a collision-free name; `delete` tolerates paths that
/// no longer resolve to a file, since a ticket can outlive its attachment.
pub trait AttachmentStore: Send + Sync {
    /// Stores the bytes and returns a retrievable path
    fn save(&self, bytes: &[u8], original_filename: &str) -> Result<String>;

    /// Deletes a previously stored attachment; missing files are not an error
    fn delete(&self, path: &str) -> Result<()>;
}

/// Attachment store writing into a single uploads directory
///
/// Files are named by a random identifier plus the original extension, so
/// uploads with identical names never collide.
pub struct UploadDir {
    dir: PathBuf,
}

impl UploadDir {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The uploads directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl AttachmentStore for UploadDir {
    fn save(&self, bytes: &[u8], original_filename: &str) -> Result<String> {
        fs::create_dir_all(&self.dir)?;

        let mut name = Uuid::new_v4().to_string();
        if let Some(ext) = Path::new(original_filename).extension().and_then(|e| e.to_str()) {
            name.push('.');
            name.push_str(ext);
        }

        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        info!("Attachment stored: {}", path.display());

        Ok(path.to_string_lossy().into_owned())
    }

    fn delete(&self, path: &str) -> Result<()> {
        let path = Path::new(path);
        if path.exists() {
            fs::remove_file(path)?;
            info!("Attachment deleted: {}", path.display());
        } else {
            info!("Attachment already gone: {}", path.display());
        }
        Ok(())
    }
}
