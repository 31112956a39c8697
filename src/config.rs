//! Configuration loader describing where assets and the manifest live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::MANIFEST_FILE_NAME;
use crate::project::ChecksumLayout;

const DEFAULT_CONFIG_FILE: &str = "checksums.config.json";

/// Environment variable overriding the install root.
pub const INSTALL_ROOT_ENV: &str = "EFI_BOOT_PATH";

/// Discoverable configuration for the checksum tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
  /// Directory holding development copies of the assets.
  pub source_root: String,
  /// Boot partition directory holding installed assets and the manifest.
  pub install_root: String,
  /// Manifest file name inside the install root.
  pub manifest_file: String,
}

impl Default for ChecksumConfig {
  fn default() -> Self {
    Self {
      source_root: "src".into(),
      install_root: Path::new("EFI").join("BOOT").to_string_lossy().into_owned(),
      manifest_file: MANIFEST_FILE_NAME.into(),
    }
  }
}

impl ChecksumConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or unparsable file falls back to the defaults.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
      Ok(config) => Some(config),
      Err(err) => {
        log::warn!("ignoring malformed config {}: {err}", path.display());
        None
      }
    }
  }

  /// Apply overrides from an arbitrary variable lookup.
  pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(install_root) = lookup(INSTALL_ROOT_ENV).filter(|value| !value.is_empty()) {
      self.install_root = install_root;
    }
    self
  }

  /// Convert the configuration into a layout.
  pub fn into_layout(self) -> ChecksumLayout {
    ChecksumLayout {
      source_root: self.source_root.into(),
      install_root: self.install_root.into(),
      manifest_file: self.manifest_file,
    }
  }

  /// Layer the environment and explicit path overrides onto this configuration.
  ///
  /// Precedence, highest first: `install_root`/`source_root` arguments, `EFI_BOOT_PATH`,
  /// then the values already held by the configuration.
  pub fn resolve_layout<F>(
    self,
    lookup: F,
    install_root: Option<PathBuf>,
    source_root: Option<PathBuf>,
  ) -> ChecksumLayout
  where
    F: Fn(&str) -> Option<String>,
  {
    self
      .with_env_lookup(lookup)
      .into_layout()
      .with_overrides(install_root, source_root)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn efi_boot_path(value: &'static str) -> impl Fn(&str) -> Option<String> {
    move |key| (key == INSTALL_ROOT_ENV).then(|| value.to_string())
  }

  #[test]
  fn defaults_to_efi_boot() {
    let layout = ChecksumConfig::default().into_layout();
    assert_eq!(layout.source_root, PathBuf::from("src"));
    assert_eq!(
      layout.manifest_path(),
      PathBuf::from("EFI").join("BOOT").join("checksums.dat")
    );
  }

  #[test]
  fn discover_reads_partial_config() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"install_root":"/boot/efi/EFI/BOOT"}"#,
    )
    .unwrap();

    let config = ChecksumConfig::discover(dir.path());
    assert_eq!(config.install_root, "/boot/efi/EFI/BOOT");
    assert_eq!(config.source_root, "src");
    assert_eq!(config.manifest_file, "checksums.dat");
  }

  #[test]
  fn discover_falls_back_on_malformed_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{not json").unwrap();
    assert_eq!(ChecksumConfig::discover(dir.path()), ChecksumConfig::default());
  }

  #[test]
  fn env_overrides_install_root() {
    let config = ChecksumConfig::default().with_env_lookup(efi_boot_path("/mnt/esp/EFI/BOOT"));
    assert_eq!(config.install_root, "/mnt/esp/EFI/BOOT");
  }

  #[test]
  fn empty_env_value_is_ignored() {
    let config = ChecksumConfig::default().with_env_lookup(|_| Some(String::new()));
    assert_eq!(config, ChecksumConfig::default());
  }

  #[test]
  fn env_beats_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"source_root":"assets","install_root":"/from/file"}"#,
    )
    .unwrap();

    let layout =
      ChecksumConfig::discover(dir.path()).resolve_layout(efi_boot_path("/from/env"), None, None);
    assert_eq!(layout.install_root, PathBuf::from("/from/env"));
    assert_eq!(layout.source_root, PathBuf::from("assets"));
  }

  #[test]
  fn explicit_roots_beat_env_and_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"source_root":"assets","install_root":"/from/file"}"#,
    )
    .unwrap();

    let layout = ChecksumConfig::discover(dir.path()).resolve_layout(
      efi_boot_path("/from/env"),
      Some(PathBuf::from("/from/cli")),
      Some(PathBuf::from("dev-assets")),
    );
    assert_eq!(layout.install_root, PathBuf::from("/from/cli"));
    assert_eq!(layout.source_root, PathBuf::from("dev-assets"));
    assert_eq!(layout.manifest_path(), PathBuf::from("/from/cli/checksums.dat"));
  }

  #[test]
  fn defaults_apply_without_file_env_or_overrides() {
    let dir = tempdir().unwrap();
    let layout = ChecksumConfig::discover(dir.path()).resolve_layout(|_| None, None, None);
    assert_eq!(layout, ChecksumConfig::default().into_layout());
  }
}
