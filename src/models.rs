//! Reports produced by manifest generation and verification.

use std::path::PathBuf;

use serde::Serialize;

use crate::asset_paths::AssetOrigin;

/// Digest computed for one asset during generation.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedAsset {
  /// Logical file name.
  pub file_name: &'static str,
  /// Human readable description.
  pub description: &'static str,
  /// Path that was hashed.
  pub path: PathBuf,
  /// Root the path was resolved from.
  pub origin: AssetOrigin,
  /// Lowercase hex SHA-256.
  pub sha256: String,
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
  /// Manifest that was written.
  pub manifest_path: PathBuf,
  /// Hashed assets in manifest order.
  pub assets: Vec<GeneratedAsset>,
}

/// Verification state of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
  /// Current digest equals the stored one.
  Valid,
  /// Digest differs, or the manifest has no digest at this position.
  Mismatch,
  /// The asset file does not exist.
  Missing {
    /// Diagnostic text.
    reason: String,
  },
  /// The asset exists but could not be read.
  Unreadable {
    /// Diagnostic text.
    reason: String,
  },
}

impl AssetStatus {
  /// Returns `true` only for [`AssetStatus::Valid`].
  pub fn is_valid(&self) -> bool {
    matches!(self, AssetStatus::Valid)
  }
}

/// Per-asset verification record.
#[derive(Debug, Clone, Serialize)]
pub struct AssetVerification {
  /// Logical file name.
  pub file_name: &'static str,
  /// Human readable description.
  pub description: &'static str,
  /// Path that was hashed.
  pub path: PathBuf,
  /// Root the path was resolved from.
  pub origin: AssetOrigin,
  /// Outcome for this asset.
  #[serde(flatten)]
  pub status: AssetStatus,
}

/// Outcome of a verification run over every tracked asset.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
  /// Manifest that was compared against.
  pub manifest_path: PathBuf,
  /// Size of the manifest in bytes.
  pub manifest_len: usize,
  /// Per-asset results in manifest order.
  pub assets: Vec<AssetVerification>,
}

impl VerificationReport {
  /// Accept only when every asset verified.
  pub fn is_valid(&self) -> bool {
    self.assets.iter().all(|asset| asset.status.is_valid())
  }

  /// Assets that failed verification.
  pub fn failures(&self) -> impl Iterator<Item = &AssetVerification> {
    self.assets.iter().filter(|asset| !asset.status.is_valid())
  }
}
