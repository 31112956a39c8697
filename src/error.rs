//! Error types raised while hashing assets and reading or writing the manifest.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a digest for a single file.
#[derive(Debug, Error)]
pub enum DigestError {
  /// The file does not exist or could not be opened for reading.
  #[error("file not found - {}", path.display())]
  AssetNotFound {
    /// Path that was opened.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: io::Error,
  },
  /// The file was opened but reading it failed.
  #[error("error reading {}: {source}", path.display())]
  IoRead {
    /// Path that was being read.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: io::Error,
  },
}

impl DigestError {
  /// Path of the file that could not be hashed.
  pub fn path(&self) -> &std::path::Path {
    match self {
      DigestError::AssetNotFound { path, .. } | DigestError::IoRead { path, .. } => path,
    }
  }

  /// Returns `true` when the file itself is absent rather than unreadable.
  pub fn is_not_found(&self) -> bool {
    match self {
      DigestError::AssetNotFound { source, .. } => source.kind() == io::ErrorKind::NotFound,
      DigestError::IoRead { .. } => false,
    }
  }
}

/// Reasons a manifest generation run aborts.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// An asset could not be hashed; nothing was written.
  #[error("{description} ({file_name}) not found or inaccessible: {source}")]
  Asset {
    /// File name of the failing asset.
    file_name: &'static str,
    /// Description of the failing asset.
    description: &'static str,
    /// Underlying digest failure.
    #[source]
    source: DigestError,
  },
  /// The directory holding the manifest could not be created.
  #[error("failed to create manifest directory {}: {source}", path.display())]
  ManifestDir {
    /// Directory that could not be created.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: io::Error,
  },
  /// Writing the manifest bytes failed.
  #[error("error writing checksums file {}: {source}", path.display())]
  ManifestWrite {
    /// Manifest path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: io::Error,
  },
}

/// Reasons a verification run cannot start.
#[derive(Debug, Error)]
pub enum VerifyError {
  /// No manifest has been generated yet.
  #[error("no existing checksums file found at {}", path.display())]
  ManifestMissing {
    /// Expected manifest path.
    path: PathBuf,
  },
  /// The manifest exists but could not be read.
  #[error("failed to read checksums file {}: {source}", path.display())]
  ManifestRead {
    /// Manifest path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: io::Error,
  },
}
