//! Resolved filesystem layout shared by generation and verification.

use std::path::{Path, PathBuf};

use crate::assets::MANIFEST_FILE_NAME;

/// Directories consulted when hashing assets, plus the manifest location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumLayout {
  /// In-tree asset directory, searched first.
  pub source_root: PathBuf,
  /// Boot partition directory; fallback for assets and home of the manifest.
  pub install_root: PathBuf,
  /// Manifest file name inside `install_root`.
  pub manifest_file: String,
}

impl ChecksumLayout {
  /// Layout with the standard manifest file name.
  pub fn new(source_root: impl Into<PathBuf>, install_root: impl Into<PathBuf>) -> Self {
    Self {
      source_root: source_root.into(),
      install_root: install_root.into(),
      manifest_file: MANIFEST_FILE_NAME.to_string(),
    }
  }

  /// Full path of the manifest file.
  pub fn manifest_path(&self) -> PathBuf {
    self.install_root.join(&self.manifest_file)
  }

  /// Replace roots with explicitly supplied paths, keeping them as given.
  pub fn with_overrides(
    mut self,
    install_root: Option<PathBuf>,
    source_root: Option<PathBuf>,
  ) -> Self {
    if let Some(root) = install_root {
      self.install_root = root;
    }
    if let Some(root) = source_root {
      self.source_root = root;
    }
    self
  }

  /// Candidate roots in lookup order.
  pub fn search_roots(&self) -> [&Path; 2] {
    [self.source_root.as_path(), self.install_root.as_path()]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn manifest_lives_in_install_root() {
    let layout = ChecksumLayout::new("src", "EFI/BOOT");
    assert_eq!(
      layout.manifest_path(),
      PathBuf::from("EFI").join("BOOT").join("checksums.dat")
    );
  }

  #[test]
  fn overrides_replace_only_supplied_roots() {
    let layout =
      ChecksumLayout::new("src", "EFI/BOOT").with_overrides(Some("/mnt/esp".into()), None);
    assert_eq!(layout.install_root, PathBuf::from("/mnt/esp"));
    assert_eq!(layout.source_root, PathBuf::from("src"));
    assert_eq!(layout.manifest_path(), PathBuf::from("/mnt/esp/checksums.dat"));
  }

  #[cfg(unix)]
  #[test]
  fn overrides_keep_non_utf8_paths_intact() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = PathBuf::from(OsStr::from_bytes(b"/mnt/esp-\xff"));
    let layout = ChecksumLayout::new("src", "EFI/BOOT").with_overrides(None, Some(raw.clone()));
    assert_eq!(layout.source_root, raw);
    assert_eq!(layout.source_root.as_os_str().as_bytes(), b"/mnt/esp-\xff");
  }
}
