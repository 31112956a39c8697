use std::path::PathBuf;

use serde::Serialize;

use crate::project::ChecksumLayout;

/// Which root a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOrigin {
  /// Found under the source root.
  Source,
  /// Install-root path; not checked for existence.
  Installed,
}

/// Physical location chosen for a logical asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAsset {
  /// Path to read.
  pub path: PathBuf,
  /// Root the path belongs to.
  pub origin: AssetOrigin,
}

/// Generate candidate paths for `file_name` in lookup order.
pub fn candidate_paths(layout: &ChecksumLayout, file_name: &str) -> Vec<PathBuf> {
  layout
    .search_roots()
    .iter()
    .map(|root| root.join(file_name))
    .collect()
}

/// Pick the path to hash for `file_name`.
///
/// The first candidate that exists wins. The install-root candidate is the fallback and is
/// returned without touching the filesystem.
pub fn resolve_asset_path(layout: &ChecksumLayout, file_name: &str) -> ResolvedAsset {
  let mut candidates = candidate_paths(layout, file_name);
  let fallback = candidates.pop().unwrap_or_else(|| layout.install_root.join(file_name));

  if let Some(path) = candidates.into_iter().find(|candidate| candidate.exists()) {
    log::debug!("resolved {file_name} to source copy {}", path.display());
    return ResolvedAsset {
      path,
      origin: AssetOrigin::Source,
    };
  }

  log::debug!("resolved {file_name} to installed copy {}", fallback.display());
  ResolvedAsset {
    path: fallback,
    origin: AssetOrigin::Installed,
  }
}
