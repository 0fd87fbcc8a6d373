use std::path::{Path, PathBuf};

/// Failure to read, decode or write one of the embedder's files.
#[derive(Debug)]
pub enum FileAccessError {
    Read { path: PathBuf, source: std::io::Error },
    Decode { path: PathBuf, source: image::ImageError },
    Write { path: PathBuf, source: std::io::Error },
}

impl FileAccessError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        FileAccessError::Read { path: path.to_path_buf(), source }
    }

    pub fn decode(path: &Path, source: image::ImageError) -> Self {
        FileAccessError::Decode { path: path.to_path_buf(), source }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        FileAccessError::Write { path: path.to_path_buf(), source }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileAccessError::Read { path, .. }
            | FileAccessError::Decode { path, .. }
            | FileAccessError::Write { path, .. } => path,
        }
    }
}

impl std::fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAccessError::Read { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            },
            FileAccessError::Decode { path, source } => {
                write!(f, "Failed to decode image {}: {source}", path.display())
            },
            FileAccessError::Write { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            },
        }
    }
}

impl std::error::Error for FileAccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileAccessError::Read { source, .. } | FileAccessError::Write { source, .. } => {
                Some(source)
            },
            FileAccessError::Decode { source, .. } => Some(source),
        }
    }
}
