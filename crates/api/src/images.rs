//! Filesystem store for uploaded item images.
//!
//! Items only keep the stored file name as an opaque string; nothing here is
//! consulted when an item is created or updated.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the image store.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file name is empty or could escape the image directory.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Only png and jpeg images are accepted.
    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    /// No image with that name exists.
    #[error("Image not found: {0}")]
    NotFound(String),

    /// Filesystem failure.
    #[error("Image I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// Stable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ImageError::InvalidFileName(_) => "INVALID_FILE_NAME",
            ImageError::UnsupportedType(_) => "UNSUPPORTED_IMAGE_TYPE",
            ImageError::NotFound(_) => "IMAGE_NOT_FOUND",
            ImageError::Io(_) => "IMAGE_IO",
        }
    }
}

/// Image directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens the store, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, ImageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stores an uploaded image under a generated name and returns that name.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ImageError> {
        let extension = extension_of(original_name)
            .ok_or_else(|| ImageError::UnsupportedType(original_name.to_string()))?;
        let file_name = format!("{}.{extension}", uuid::Uuid::new_v4());

        tokio::fs::write(self.root.join(&file_name), bytes).await?;
        tracing::info!(%file_name, "image stored");
        Ok(file_name)
    }

    /// Lists stored image file names, sorted.
    pub async fn list(&self) -> Result<Vec<String>, ImageError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && extension_of(name).is_some()
            {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Reads an image, returning its bytes and content type.
    pub async fn read(&self, file_name: &str) -> Result<(Vec<u8>, &'static str), ImageError> {
        let path = self.path_of(file_name)?;
        let content_type = extension_of(file_name)
            .map(content_type_of)
            .ok_or_else(|| ImageError::UnsupportedType(file_name.to_string()))?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok((bytes, content_type)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes an image.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, file_name: &str) -> Result<(), ImageError> {
        let path = self.path_of(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(%file_name, "image deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageError::NotFound(file_name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn path_of(&self, file_name: &str) -> Result<PathBuf, ImageError> {
        let invalid = file_name.is_empty()
            || file_name.starts_with('.')
            || file_name.contains(['/', '\\'])
            || file_name.contains("..");
        if invalid {
            return Err(ImageError::InvalidFileName(file_name.to_string()));
        }
        Ok(self.root.join(file_name))
    }
}

/// Returns the normalized extension for accepted image names.
fn extension_of(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("png"),
        "jpg" => Some("jpg"),
        "jpeg" => Some("jpeg"),
        _ => None,
    }
}

fn content_type_of(extension: &'static str) -> &'static str {
    match extension {
        "png" => "image/png",
        _ => "image/jpeg",
    }
}
